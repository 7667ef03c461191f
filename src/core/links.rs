//! # Link Opener Port
//!
//! The core decides *that* a URL should be opened; something outside
//! decides *how*. Opening is fire-and-forget: the core never learns
//! whether it worked and never retries.

pub trait LinkOpener {
    fn open(&self, url: &str);
}

impl<L: LinkOpener + ?Sized> LinkOpener for &L {
    fn open(&self, url: &str) {
        (**self).open(url)
    }
}
