#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CookieChoice {
    Accepted,
    Declined,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieBanner {
    choice: Option<CookieChoice>,
}

impl CookieBanner {
    pub fn new() -> Self {
        Self { choice: None }
    }

    pub fn is_visible(&self) -> bool {
        self.choice.is_none()
    }

    pub fn choice(&self) -> Option<CookieChoice> {
        self.choice
    }

    pub fn accept(&mut self) {
        self.choose(CookieChoice::Accepted);
    }

    pub fn decline(&mut self) {
        self.choose(CookieChoice::Declined);
    }

    fn choose(&mut self, choice: CookieChoice) {
        if self.choice.is_none() {
            tracing::debug!("cookie banner dismissed: {:?}", choice);
            self.choice = Some(choice);
        }
    }
}

impl Default for CookieBanner {
    fn default() -> Self {
        Self::new()
    }
}
