// PDA seeds
pub const SEED_PROFILE: &[u8] = b"profile";

// Account space
pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Profile limits, in bytes for text fields
pub const MAX_LINKS: usize = 10;
pub const MAX_DISPLAY_NAME_LEN: usize = 50;
pub const MAX_LABEL_LEN: usize = 50;
pub const MAX_URL_LEN: usize = 100;
