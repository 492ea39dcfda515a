//! Builder API for the wide record types.
//!
//! # Example
//!
//! ```rust
//! use trantor_content::model::builder::MediaDataBuilder;
//! use trantor_content::License;
//!
//! let media = MediaDataBuilder::new("CXuser...", "CXcontent...")
//!     .title("Sunset")
//!     .content_type("image/png")
//!     .license(License::By40)
//!     .tag("photo")
//!     .price(5_000)
//!     .build();
//!
//! assert_eq!(media.tags, vec!["photo".to_string()]);
//! assert_eq!(media.public_file_size, 0);
//! ```

use crate::model::{Author, Hash32, License, MediaData};

/// Builder for a [`MediaData`] record.
///
/// Unset fields default to empty text, no tags, zero price and zero sizes.
#[derive(Debug, Clone)]
pub struct MediaDataBuilder {
    media: MediaData,
}

impl MediaDataBuilder {
    /// Creates a builder for content published by `user_address`.
    pub fn new(user_address: impl Into<String>, content_address: impl Into<String>) -> Self {
        Self {
            media: MediaData {
                user_address: user_address.into(),
                content_address: content_address.into(),
                ..MediaData::default()
            },
        }
    }

    pub fn license(mut self, license: License) -> Self {
        self.media.license = license;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.media.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.media.description = description.into();
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.media.content_type = content_type.into();
        self
    }

    /// Adds a single tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.media.tags.push(tag.into());
        self
    }

    /// Adds several tags at once.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.media.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn price(mut self, price: u64) -> Self {
        self.media.price = price;
        self
    }

    /// Sets the public content reference and its size in bytes.
    pub fn public_content(mut self, reference: impl Into<String>, size: u32) -> Self {
        self.media.public_content = reference.into();
        self.media.public_file_size = size;
        self
    }

    /// Sets the private content reference and its size in bytes.
    pub fn private_content(mut self, reference: impl Into<String>, size: u32) -> Self {
        self.media.private_content = reference.into();
        self.media.private_file_size = size;
        self
    }

    pub fn hash(mut self, hash: Hash32) -> Self {
        self.media.hash = hash;
        self
    }

    pub fn build(self) -> MediaData {
        self.media
    }
}

/// Builder for an [`Author`] record.
#[derive(Debug, Clone)]
pub struct AuthorBuilder {
    author: Author,
}

impl AuthorBuilder {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            author: Author {
                address: address.into(),
                ..Author::default()
            },
        }
    }

    pub fn nick(mut self, nick: impl Into<String>) -> Self {
        self.author.nick = nick.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.author.email = email.into();
        self
    }

    pub fn web(mut self, web: impl Into<String>) -> Self {
        self.author.web = web.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.author.description = description.into();
        self
    }

    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.author.avatar = avatar.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.author.tags.push(tag.into());
        self
    }

    pub fn build(self) -> Author {
        self.author
    }
}
