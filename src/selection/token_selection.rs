use crate::model::Token;
use crate::remote::{IonClient, PendingReply};
use crate::signal::Signal;

use super::TokenChoice;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenMode {
    Existing,
    New,
    Manual,
}

/// One entry of the existing-token list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenOption {
    pub name: String,
    pub token: Option<String>,
}

impl From<Token> for TokenOption {
    fn from(token: Token) -> Self {
        Self {
            name: token.name,
            token: token.token,
        }
    }
}

/// Chooses how an asset gets its access token: reuse a listed token, create
/// a new one, or paste one by hand.
///
/// Every change emits `is_valid_changed` with the current [`is_valid`] value.
///
/// [`is_valid`]: TokenSelection::is_valid
#[derive(Debug)]
pub struct TokenSelection {
    mode: TokenMode,
    existing_enabled: bool,
    options: Vec<TokenOption>,
    current: Option<usize>,
    new_token_name: String,
    manual_token: String,
    listing: Option<PendingReply>,
    listing_done: bool,
    is_valid_changed: Signal<bool>,
}

impl Default for TokenSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenSelection {
    pub fn new() -> Self {
        Self {
            mode: TokenMode::Existing,
            existing_enabled: true,
            options: Vec::new(),
            current: None,
            new_token_name: String::new(),
            manual_token: String::new(),
            listing: None,
            listing_done: false,
            is_valid_changed: Signal::new(),
        }
    }

    pub fn is_valid_changed(&self) -> &Signal<bool> {
        &self.is_valid_changed
    }

    pub fn mode(&self) -> TokenMode {
        self.mode
    }

    pub fn existing_enabled(&self) -> bool {
        self.existing_enabled
    }

    pub fn options(&self) -> &[TokenOption] {
        &self.options
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn is_listing(&self) -> bool {
        self.listing.is_some()
    }

    pub fn listing_done(&self) -> bool {
        self.listing_done
    }

    /// Starts the asynchronous token listing that fills the option list.
    ///
    /// The reply is owned by the selection, so dropping the selection
    /// abandons the request and a late reply never reaches it.
    pub fn begin_listing(&mut self, client: &IonClient) {
        self.listing = Some(client.list_tokens_request(None, None));
        self.listing_done = false;
    }

    /// Checks the pending listing without blocking. Returns `true` when it
    /// completed during this call.
    pub fn poll_listing(&mut self, client: &IonClient) -> bool {
        let Some(pending) = self.listing.as_mut() else {
            return false;
        };
        let Some(reply) = pending.try_finish() else {
            return false;
        };
        self.listing = None;
        let tokens = client.parse_list_tokens_reply(reply);
        self.tokens_loaded(tokens);
        true
    }

    pub fn wait_for_listing(&mut self, client: &IonClient) {
        if let Some(pending) = self.listing.take() {
            let tokens = client.parse_list_tokens_reply(pending.wait());
            self.tokens_loaded(tokens);
        }
    }

    /// Applies a finished token listing, replacing any earlier one.
    ///
    /// An empty listing disables the existing-token mode and moves the
    /// selection off it to the new-token mode. A chosen new or manual mode
    /// is left as it is.
    pub fn tokens_loaded(&mut self, tokens: Vec<Token>) {
        self.listing_done = true;
        let previous = self
            .current
            .and_then(|i| self.options.get(i))
            .map(|o| o.name.clone());
        self.options = tokens.into_iter().map(TokenOption::from).collect();
        self.current = match previous {
            Some(name) => self.options.iter().position(|o| o.name == name),
            None => None,
        };
        if self.current.is_none() && !self.options.is_empty() {
            self.current = Some(0);
        }
        self.existing_enabled = !self.options.is_empty();
        if !self.existing_enabled && self.mode == TokenMode::Existing {
            self.mode = TokenMode::New;
        }
        self.validate();
    }

    /// User mode switch. The existing-token mode is refused while disabled.
    pub fn set_mode(&mut self, mode: TokenMode) -> bool {
        if mode == TokenMode::Existing && !self.existing_enabled {
            return false;
        }
        self.mode = mode;
        self.validate();
        true
    }

    pub fn select_existing(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            return false;
        }
        self.current = Some(index);
        self.validate();
        true
    }

    pub fn select_existing_by_name(&mut self, name: &str) -> bool {
        match self.options.iter().position(|o| o.name == name) {
            Some(index) => self.select_existing(index),
            None => false,
        }
    }

    pub fn set_new_token_name(&mut self, name: &str) {
        self.new_token_name = name.to_string();
        self.validate();
    }

    pub fn set_manual_token(&mut self, token: &str) {
        self.manual_token = token.to_string();
        self.validate();
    }

    fn current_secret(&self) -> Option<&str> {
        self.current
            .and_then(|i| self.options.get(i))
            .and_then(|o| o.token.as_deref())
            .filter(|t| !t.is_empty())
    }

    pub fn is_valid(&self) -> bool {
        match self.mode {
            TokenMode::Existing => self.current_secret().is_some(),
            TokenMode::New => !self.new_token_name.trim().is_empty(),
            TokenMode::Manual => !self.manual_token.trim().is_empty(),
        }
    }

    fn validate(&self) {
        self.is_valid_changed.emit(&self.is_valid());
    }

    /// Token to use as-is: the selected listed token or the pasted one.
    pub fn existing_token(&self) -> Option<String> {
        match self.mode {
            TokenMode::Existing => self.current_secret().map(str::to_string),
            TokenMode::Manual => Some(self.manual_token.trim().to_string()),
            TokenMode::New => None,
        }
    }

    pub fn new_token_name(&self) -> Option<String> {
        match self.mode {
            TokenMode::New => Some(self.new_token_name.trim().to_string()),
            _ => None,
        }
    }

    pub fn choice(&self) -> Option<TokenChoice> {
        if !self.is_valid() {
            return None;
        }
        Some(match self.mode {
            TokenMode::Existing => TokenChoice::Existing(self.current_secret()?.to_string()),
            TokenMode::New => TokenChoice::New(self.new_token_name.trim().to_string()),
            TokenMode::Manual => TokenChoice::Manual(self.manual_token.trim().to_string()),
        })
    }
}

#[cfg(test)]
#[path = "../tests/selection/token_selection_tests.rs"]
mod tests;
