//! Synthetic user generation.
//!
//! Documents are produced from a caller-supplied RNG so population uses fresh
//! entropy while tests can seed the generator and assert reproducible output.

use fake::Fake;
use fake::faker::internet::raw::{SafeEmail, Username};
use fake::faker::name::raw::Name;
use fake::locales::EN;
use rand::Rng;

use crate::domain::user::UserDocument;

/// Generate one synthetic user document from the provided RNG.
pub fn synthetic_user<R: Rng + ?Sized>(rng: &mut R) -> UserDocument {
    let username: String = Username(EN).fake_with_rng(rng);
    let email: String = SafeEmail(EN).fake_with_rng(rng);
    let real_name: String = Name(EN).fake_with_rng(rng);

    UserDocument {
        username,
        email,
        real_name,
    }
}
