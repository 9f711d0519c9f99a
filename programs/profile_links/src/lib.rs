#![allow(clippy::result_large_err)]
use anchor_lang::prelude::*;
declare_id!("Cc375VeukGtm6PawGFJ9ZU9ELwwNtbAHHAB7fxFSUySy");

pub mod profile;

pub mod constants;
pub mod error;
pub mod events;
pub mod utils;

pub use profile::*;

#[program]
pub mod profile_links {
    use super::*;

    pub fn create_profile(ctx: Context<ACreateProfile>, display_name: String) -> Result<()> {
        profile::create_profile(ctx, display_name)?;
        Ok(())
    }

    //Authority calls
    pub fn add_link(ctx: Context<AAddLink>, label: String, url: String) -> Result<()> {
        profile::add_link(ctx, label, url)?;
        Ok(())
    }

    pub fn update_link(
        ctx: Context<AUpdateLink>,
        index: u8,
        label: String,
        url: String,
    ) -> Result<()> {
        profile::update_link(ctx, index, label, url)?;
        Ok(())
    }

    pub fn remove_link(ctx: Context<ARemoveLink>, index: u8) -> Result<()> {
        profile::remove_link(ctx, index)?;
        Ok(())
    }
}
