use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_DISPLAY_NAME_LEN, MAX_LABEL_LEN, MAX_LINKS, MAX_URL_LEN},
    error::ProfileError,
};

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, PartialEq, Eq)]
pub struct Link {
    #[max_len(MAX_LABEL_LEN)]
    pub label: String,
    #[max_len(MAX_URL_LEN)]
    pub url: String,
}

impl Link {
    /// Builds a link that fits the space reserved for it. The url is not
    /// checked for well-formedness.
    pub fn new(label: String, url: String) -> Result<Self> {
        require!(label.len() <= MAX_LABEL_LEN, ProfileError::LabelTooLong);
        require!(url.len() <= MAX_URL_LEN, ProfileError::UrlTooLong);
        Ok(Self { label, url })
    }
}

/// One per wallet, at seeds ["profile", authority].
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct UserProfile {
    /// Wallet allowed to change this profile
    pub authority: Pubkey,
    /// PDA bump
    pub bump: u8,
    #[max_len(MAX_DISPLAY_NAME_LEN)]
    pub display_name: String,
    /// Ordered, addressed by position
    #[max_len(MAX_LINKS)]
    pub links: Vec<Link>,
}

impl UserProfile {
    pub fn initialize(&mut self, authority: Pubkey, bump: u8, display_name: String) -> Result<()> {
        require!(
            display_name.len() <= MAX_DISPLAY_NAME_LEN,
            ProfileError::DisplayNameTooLong
        );
        self.authority = authority;
        self.bump = bump;
        self.display_name = display_name;
        self.links = Vec::new();
        Ok(())
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn is_full(&self) -> bool {
        self.links.len() >= MAX_LINKS
    }

    pub fn link(&self, index: u8) -> Option<&Link> {
        self.links.get(index as usize)
    }

    /// Appends `link` and returns the position it was stored at.
    pub fn push_link(&mut self, link: Link) -> Result<u8> {
        require!(!self.is_full(), ProfileError::LinkLimitReached);
        self.links.push(link);
        Ok((self.links.len() - 1) as u8)
    }

    pub fn replace_link(&mut self, index: u8, link: Link) -> Result<()> {
        let slot = self
            .links
            .get_mut(index as usize)
            .ok_or(ProfileError::IndexOutOfBounds)?;
        *slot = link;
        Ok(())
    }

    /// Removes the link at `index`, shifting later links down by one so their
    /// relative order is kept.
    pub fn remove_link(&mut self, index: u8) -> Result<Link> {
        require!(
            (index as usize) < self.links.len(),
            ProfileError::IndexOutOfBounds
        );
        Ok(self.links.remove(index as usize))
    }
}
