//! Support for gettext `.po` catalogs.
//!
//! Output is a plain list of `msgid`/`msgstr` blocks with LF line endings and
//! no header entry. Strings are written as they come: quoting was already
//! converted when the resource script was read.

use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use tracing::warn;

use crate::{error::Error, traits::Writer, types::TranslationPair};

/// One `msgid`/`msgstr` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub msgid: String,
    pub msgstr: String,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "msgid \"{}\"\nmsgstr \"{}\"\n\n", self.msgid, self.msgstr)
    }
}

/// A translation dropped because its `msgid` was already taken by a
/// different value earlier in the same catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedTranslation {
    pub msgid: String,
    /// The value kept in the catalog.
    pub kept: String,
    /// The value that was dropped.
    pub dropped: String,
}

/// A `.po` catalog with unique message ids, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Format {
    pub messages: Vec<Message>,
    /// Conflicting duplicates encountered while building the catalog.
    pub dropped: Vec<DroppedTranslation>,
}

impl Format {
    /// Builds a catalog from aligned pairs.
    ///
    /// The first value seen for an id wins. Later pairs with the same id are
    /// skipped; when their value differs a warning is logged and the pair is
    /// recorded in [`Format::dropped`].
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = TranslationPair>,
    {
        let mut seen: HashMap<String, String> = HashMap::new();
        let mut catalog = Format::default();

        for pair in pairs {
            if let Some(kept) = seen.get(&pair.final_id) {
                if *kept != pair.text {
                    warn!(
                        "Omitted translation due to duplicate source string {:?}: {:?}",
                        pair.final_id, pair.text
                    );
                    catalog.dropped.push(DroppedTranslation {
                        msgid: pair.final_id,
                        kept: kept.clone(),
                        dropped: pair.text,
                    });
                }
                continue;
            }

            seen.insert(pair.final_id.clone(), pair.text.clone());
            catalog.messages.push(Message {
                msgid: pair.final_id,
                msgstr: pair.text,
            });
        }

        catalog
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Writer for Format {
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        for message in &self.messages {
            write!(writer, "{}", message)?;
        }
        Ok(())
    }
}
