// marketplace/src/services/profiles.rs

use tracing::{debug, instrument};
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::{Profile, User};
use crate::state::Marketplace;

/// A profile with its owning user attached. `user` is `None` when the
/// back-reference dangles; the store does not enforce it.
#[derive(Debug, Clone)]
pub struct ProfileView {
  pub profile: Profile,
  pub user: Option<User>,
}

/// Creates the user's profile and links it back onto the user record.
/// A user gets exactly one profile; this is the application-level check the
/// storage layer does not provide.
#[instrument(name = "profiles::create", skip(marketplace, bio), fields(%user_id), err(Display))]
pub fn create_profile(marketplace: &Marketplace, user_id: Uuid, bio: &str) -> Result<Profile> {
  let user = marketplace
    .users
    .find(user_id)?
    .ok_or_else(|| AppError::NotFound(format!("User {}", user_id)))?;

  if user.profile_id.is_some()
    || !marketplace
      .profiles
      .filtered(&|profile: &Profile| profile.user_id == user_id)?
      .is_empty()
  {
    return Err(AppError::Duplicate("User already has a profile".to_string()));
  }

  let profile = Profile::new(user_id, bio);
  let profile_id = profile.id;
  marketplace.profiles.insert(profile.clone())?;
  marketplace.users.update(user_id, |user| user.profile_id = Some(profile_id))?;
  debug!(%profile_id, "profile created");
  Ok(profile)
}

/// Applies a mutation to the caller's own profile.
#[instrument(name = "profiles::update", skip_all, fields(%acting_user_id, %profile_id), err(Display))]
pub fn update_profile<F>(
  marketplace: &Marketplace,
  acting_user_id: Uuid,
  profile_id: Uuid,
  mutate: F,
) -> Result<Profile>
where
  F: FnOnce(&mut Profile),
{
  let profile = marketplace
    .profiles
    .find(profile_id)?
    .ok_or_else(|| AppError::NotFound(format!("Profile {}", profile_id)))?;
  if profile.user_id != acting_user_id {
    return Err(AppError::Forbidden("Only the owner can edit a profile".to_string()));
  }
  Ok(marketplace.profiles.update(profile_id, mutate)?)
}

/// Fetches a profile with the owning user joined in.
pub fn get_profile(marketplace: &Marketplace, profile_id: Uuid) -> Result<ProfileView> {
  let profile = marketplace
    .profiles
    .find(profile_id)?
    .ok_or_else(|| AppError::NotFound(format!("Profile {}", profile_id)))?;
  let user = marketplace.users.find(profile.user_id)?;
  Ok(ProfileView { profile, user })
}

/// The profile belonging to a user, if one exists.
pub fn profile_for_user(marketplace: &Marketplace, user_id: Uuid) -> Result<Option<Profile>> {
  Ok(
    marketplace
      .profiles
      .filtered(&|profile: &Profile| profile.user_id == user_id)?
      .into_iter()
      .next(),
  )
}
