use anchor_lang::prelude::*;

use crate::{constants::SEED_PROFILE, events::LinkRemoved, profile::UserProfile};

pub fn remove_link(ctx: Context<ARemoveLink>, index: u8) -> Result<()> {
    let user_profile = &mut ctx.accounts.user_profile;
    let removed = user_profile.remove_link(index)?;
    let total = user_profile.link_count() as u8;
    msg!("RemoveLink: removed {:?} at {}, {} left", removed.label, index, total);

    emit!(LinkRemoved {
        profile: user_profile.key(),
        authority: ctx.accounts.authority.key(),
        index,
        total,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ARemoveLink<'info> {
    #[account(
        mut,
        has_one = authority,
        seeds = [SEED_PROFILE, authority.key().as_ref()],
        bump = user_profile.bump,
    )]
    pub user_profile: Account<'info, UserProfile>,

    #[account(mut)]
    pub authority: Signer<'info>,
}
