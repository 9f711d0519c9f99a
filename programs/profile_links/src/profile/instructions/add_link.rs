use anchor_lang::prelude::*;

use crate::{
    constants::SEED_PROFILE,
    events::LinkAdded,
    profile::{Link, UserProfile},
};

pub fn add_link(ctx: Context<AAddLink>, label: String, url: String) -> Result<()> {
    let user_profile = &mut ctx.accounts.user_profile;
    let index = user_profile.push_link(Link::new(label, url)?)?;
    let total = user_profile.link_count() as u8;
    msg!("AddLink: stored at {}, profile now has {} links", index, total);

    emit!(LinkAdded {
        profile: user_profile.key(),
        authority: ctx.accounts.authority.key(),
        index,
        total,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AAddLink<'info> {
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
