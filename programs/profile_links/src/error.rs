use anchor_lang::prelude::error_code;

// Variant order fixes the on-chain codes (6000, 6001, ...), append only.
#[error_code]
pub enum ProfileError {
    #[msg("The provided index is out of bounds.")]
    IndexOutOfBounds,

    #[msg("Cannot add more links. The limit is 10.")]
    LinkLimitReached,

    #[msg("Display name is too long.")]
    DisplayNameTooLong,

    #[msg("Link label is too long.")]
    LabelTooLong,

    #[msg("Link url is too long.")]
    UrlTooLong,
}
