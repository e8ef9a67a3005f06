pub mod directory;
pub mod home;
pub mod onboarding;
