use anchor_lang::prelude::*;

use crate::{
    constants::SEED_PROFILE,
    events::LinkUpdated,
    profile::{Link, UserProfile},
};

pub fn update_link(ctx: Context<AUpdateLink>, index: u8, label: String, url: String) -> Result<()> {
    let user_profile = &mut ctx.accounts.user_profile;
    user_profile.replace_link(index, Link::new(label, url)?)?;
    msg!("UpdateLink: replaced link {}", index);

    emit!(LinkUpdated {
        profile: user_profile.key(),
        authority: ctx.accounts.authority.key(),
        index,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AUpdateLink<'info> {
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
