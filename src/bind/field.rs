//! Field binding descriptors.
//!
//! A binding captures everything the engine needs to move one record member
//! across the tree boundary: its label or title, optional comment and
//! fallback, and accessor closures resolved once when the descriptor is
//! built. The engine walks bindings in declaration order for both directions.

use std::rc::Rc;

use crate::convert::{Culture, Scalar, ValueCodec, parse_scalar};
use crate::error::{ConfigError, Result};
use crate::line::is_hollow;
use crate::model::ConfigContent;

use super::{ConfigRecord, read_record, write_record};

pub(crate) type ReadValueFn<T> = Box<dyn Fn(&mut T, &str, Option<&str>, &Culture) -> Result<()>>;
pub(crate) type WriteValueFn<T> = Box<dyn Fn(&T, &Culture) -> Result<String>>;
pub(crate) type ReadSectionFn<T> = Box<dyn Fn(&mut T, &ConfigContent, &Culture) -> Result<()>>;
pub(crate) type WriteSectionFn<T> = Box<dyn Fn(&T, &mut ConfigContent, &Culture) -> Result<()>>;

pub(crate) enum FieldKind<T> {
    Value {
        label: String,
        comment: Option<String>,
        fallback: Option<String>,
        read: ReadValueFn<T>,
        write: WriteValueFn<T>,
    },
    Section {
        title: String,
        comment: Option<String>,
        read: ReadSectionFn<T>,
        write: WriteSectionFn<T>,
    },
}

/// One record member's declaration: how it is named in the tree and how to
/// move it in both directions.
///
/// Members without a binding are invisible to the engine in both directions.
pub struct FieldBinding<T> {
    pub(crate) kind: FieldKind<T>,
}

impl<T> FieldBinding<T> {
    /// Bind a member to a labeled value converted through its [`Scalar`]
    /// implementation.
    pub fn value<S, G, P>(label: &str, get: G, put: P) -> Self
    where
        S: Scalar + 'static,
        G: for<'a> Fn(&'a T) -> &'a S + 'static,
        P: Fn(&mut T, S) + 'static,
    {
        let parse_label = label.to_string();
        let read: ReadValueFn<T> = Box::new(
            move |record: &mut T, text: &str, _fallback: Option<&str>, culture: &Culture| {
                let value = parse_scalar::<S>(&parse_label, text, culture)?;
                put(record, value);
                Ok(())
            },
        );
        let write: WriteValueFn<T> =
            Box::new(move |record: &T, culture: &Culture| Ok(get(record).render(culture)));
        Self {
            kind: FieldKind::Value {
                label: label.to_string(),
                comment: None,
                fallback: None,
                read,
                write,
            },
        }
    }

    /// Bind a member to a labeled value converted through a custom codec.
    ///
    /// The codec is resolved here, once, and held by the binding. A fault it
    /// raises surfaces as a [`ConfigError::Codec`] naming the label and value.
    pub fn value_with<V, C, G, P>(label: &str, codec: C, get: G, put: P) -> Self
    where
        V: 'static,
        C: ValueCodec<V> + 'static,
        G: for<'a> Fn(&'a T) -> &'a V + 'static,
        P: Fn(&mut T, V) + 'static,
    {
        let codec = Rc::new(codec);
        let decode_codec = Rc::clone(&codec);
        let decode_label = label.to_string();
        let read: ReadValueFn<T> = Box::new(
            move |record: &mut T, text: &str, fallback: Option<&str>, culture: &Culture| {
                match decode_codec.decode(&decode_label, text, fallback, culture) {
                    Ok(value) => {
                        put(record, value);
                        Ok(())
                    }
                    Err(source) => Err(ConfigError::Codec {
                        label: decode_label.clone(),
                        value: text.to_string(),
                        source,
                    }),
                }
            },
        );
        let encode_label = label.to_string();
        let write: WriteValueFn<T> = Box::new(move |record: &T, culture: &Culture| {
            codec
                .encode(&encode_label, get(record), culture)
                .map_err(|source| ConfigError::Codec {
                    label: encode_label.clone(),
                    value: String::new(),
                    source,
                })
        });
        Self {
            kind: FieldKind::Value {
                label: label.to_string(),
                comment: None,
                fallback: None,
                read,
                write,
            },
        }
    }

    /// Bind an `Option` member to a labeled value converted through a custom
    /// codec; hollow input yields `None` without consulting the codec.
    pub fn optional_value_with<V, C, G, P>(label: &str, codec: C, get: G, put: P) -> Self
    where
        V: 'static,
        C: ValueCodec<V> + 'static,
        G: for<'a> Fn(&'a T) -> Option<&'a V> + 'static,
        P: Fn(&mut T, Option<V>) + 'static,
    {
        let codec = Rc::new(codec);
        let decode_codec = Rc::clone(&codec);
        let decode_label = label.to_string();
        let read: ReadValueFn<T> = Box::new(
            move |record: &mut T, text: &str, fallback: Option<&str>, culture: &Culture| {
                if is_hollow(text) {
                    put(record, None);
                    return Ok(());
                }
                match decode_codec.decode(&decode_label, text, fallback, culture) {
                    Ok(value) => {
                        put(record, Some(value));
                        Ok(())
                    }
                    Err(source) => Err(ConfigError::Codec {
                        label: decode_label.clone(),
                        value: text.to_string(),
                        source,
                    }),
                }
            },
        );
        let encode_label = label.to_string();
        let write: WriteValueFn<T> = Box::new(move |record: &T, culture: &Culture| {
            match get(record) {
                Some(value) => codec.encode(&encode_label, value, culture).map_err(|source| {
                    ConfigError::Codec {
                        label: encode_label.clone(),
                        value: String::new(),
                        source,
                    }
                }),
                None => Ok(String::new()),
            }
        });
        Self {
            kind: FieldKind::Value {
                label: label.to_string(),
                comment: None,
                fallback: None,
                read,
                write,
            },
        }
    }

    /// Bind a member to a titled section holding a nested record.
    ///
    /// Reading descends into the same-titled section of the content and
    /// recurses; a missing section degrades to the nested record's defaults.
    pub fn section<S, G, P>(title: &str, get: G, put: P) -> Self
    where
        S: ConfigRecord + 'static,
        G: for<'a> Fn(&'a T) -> &'a S + 'static,
        P: Fn(&mut T, S) + 'static,
    {
        let read_title = title.to_string();
        let read: ReadSectionFn<T> =
            Box::new(move |record: &mut T, content: &ConfigContent, culture: &Culture| {
                let nested = read_record::<S>(content, &read_title, culture)?;
                put(record, nested);
                Ok(())
            });
        let write_title = title.to_string();
        let write: WriteSectionFn<T> =
            Box::new(move |record: &T, content: &mut ConfigContent, culture: &Culture| {
                write_record::<S>(get(record), content, &write_title, culture)
            });
        Self {
            kind: FieldKind::Section {
                title: title.to_string(),
                comment: None,
                read,
                write,
            },
        }
    }

    /// Attach a comment emitted next to this field's value or section header.
    pub fn with_comment(mut self, comment: &str) -> Self {
        match &mut self.kind {
            FieldKind::Value { comment: slot, .. } | FieldKind::Section { comment: slot, .. } => {
                *slot = Some(comment.to_string());
            }
        }
        self
    }

    /// Declare fallback text converted in place of a missing value.
    ///
    /// Has no effect on section bindings.
    pub fn with_fallback(mut self, fallback: &str) -> Self {
        if let FieldKind::Value { fallback: slot, .. } = &mut self.kind {
            *slot = Some(fallback.to_string());
        }
        self
    }
}

impl<T> std::fmt::Debug for FieldBinding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            FieldKind::Value { label, fallback, .. } => f
                .debug_struct("FieldBinding::Value")
                .field("label", label)
                .field("fallback", fallback)
                .finish_non_exhaustive(),
            FieldKind::Section { title, .. } => f
                .debug_struct("FieldBinding::Section")
                .field("title", title)
                .finish_non_exhaustive(),
        }
    }
}
