use anchor_lang::prelude::*;

use crate::{
    constants::{ANCHOR_DISCRIMINATOR, SEED_PROFILE},
    events::ProfileCreated,
    profile::UserProfile,
};

pub fn create_profile(ctx: Context<ACreateProfile>, display_name: String) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let profile_key = ctx.accounts.user_profile.key();
    msg!("CreateProfile: profile {} for {}", profile_key, authority);

    let user_profile = &mut ctx.accounts.user_profile;
    user_profile.initialize(authority, ctx.bumps.user_profile, display_name)?;

    emit!(ProfileCreated {
        profile: profile_key,
        authority,
        display_name: user_profile.display_name.clone(),
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(display_name: String)]
pub struct ACreateProfile<'info> {
    // `init` fails with AccountAlreadyInUse when the profile exists
    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + UserProfile::INIT_SPACE,
        seeds = [SEED_PROFILE, authority.key().as_ref()],
        bump
    )]
    pub user_profile: Account<'info, UserProfile>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
