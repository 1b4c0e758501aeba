//! # Promz Document
//!
//! In-memory representation of a `.promz` document and the operations used to
//! modify it.
//!
//! The struct field order is the key order of the encoded form, so fields must not be
//! reordered. Every field is required when decoding; unknown keys are ignored.
//!
//! None of these operations touch timestamps, perform I/O, or check the schema.
//! Callers that want `updated_at` bumped or a [`History`] entry recorded do so
//! explicitly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A prompt template together with its metadata and revision history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promz {
    /// Version tag of the document, opaque to this crate.
    pub version: String,
    pub metadata: Metadata,
    pub content: Content,
    /// Prior revisions, oldest first.
    pub history: Vec<History>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub author: String,
    /// Unique as long as they are only modified through [`Promz::add_tag`] and [`Promz::remove_tag`].
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// The template body. Never rendered against `variables`.
    pub prompt: String,
    pub examples: Vec<Example>,
    pub variables: Vec<Variable>,
    /// Names of the applications this prompt is meant for.
    pub apps: Vec<String>,
}

/// A sample input and the output expected for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub input: String,
    pub output: String,
}

/// A placeholder the prompt expects. Names are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub description: String,
}

/// One prior revision of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    pub version: String,
    pub updated_at: DateTime<Utc>,
    pub changes: String,
}

impl Promz {
    /// Creates a document with an empty history.
    pub fn new(version: String, metadata: Metadata, content: Content) -> Promz {
        Promz {
            version,
            metadata,
            content,
            history: Vec::new(),
        }
    }

    pub fn prompt_text(&self) -> &str {
        &self.content.prompt
    }

    /// Replaces the prompt text. An empty string is accepted.
    ///
    /// `metadata.updated_at` is left untouched.
    pub fn set_prompt_text(&mut self, text: impl Into<String>) {
        self.content.prompt = text.into();
    }

    /// Appends an example. Duplicates are kept.
    pub fn add_example(&mut self, example: Example) {
        self.content.examples.push(example);
    }

    pub fn examples(&self) -> &[Example] {
        &self.content.examples
    }

    /// Appends a variable. Duplicate names are kept.
    pub fn add_variable(&mut self, variable: Variable) {
        self.content.variables.push(variable);
    }

    pub fn variables(&self) -> &[Variable] {
        &self.content.variables
    }

    pub fn add_app(&mut self, app: impl Into<String>) {
        self.content.apps.push(app.into());
    }

    pub fn apps(&self) -> &[String] {
        &self.content.apps
    }

    pub fn tags(&self) -> &[String] {
        &self.metadata.tags
    }

    /// Adds a tag unless an identical one is already present.
    ///
    /// Comparison is exact and case-sensitive; tags are not trimmed or normalized.
    ///
    /// # Arguments
    ///
    /// * `tag` - The tag to be added.
    pub fn add_tag(&mut self, tag: &str) {
        if self.metadata.tags.iter().any(|t| t == tag) {
            return;
        }
        self.metadata.tags.push(tag.to_string());
    }

    /// Removes the first tag equal to `tag`. Does nothing if there is none.
    ///
    /// The relative order of the remaining tags is preserved.
    ///
    /// # Arguments
    ///
    /// * `tag` - The tag to be removed.
    pub fn remove_tag(&mut self, tag: &str) {
        if let Some(index) = self.metadata.tags.iter().position(|t| t == tag) {
            self.metadata.tags.remove(index);
        }
    }

    /// Records a prior revision at the end of the history.
    pub fn add_history(&mut self, entry: History) {
        self.history.push(entry);
    }

    pub fn history(&self) -> &[History] {
        &self.history
    }
}

impl Metadata {
    /// Creates metadata without tags, created and last updated at `at`.
    pub fn new(title: String, description: String, author: String, at: DateTime<Utc>) -> Metadata {
        Metadata {
            title,
            description,
            author,
            tags: Vec::new(),
            created_at: at,
            updated_at: at,
        }
    }
}

impl Content {
    /// Creates content holding only a prompt.
    pub fn new(prompt: String) -> Content {
        Content {
            prompt,
            examples: Vec::new(),
            variables: Vec::new(),
            apps: Vec::new(),
        }
    }
}

impl Example {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Example {
        Example {
            input: input.into(),
            output: output.into(),
        }
    }
}

impl Variable {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Variable {
        Variable {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl History {
    pub fn new(version: impl Into<String>, updated_at: DateTime<Utc>, changes: impl Into<String>) -> History {
        History {
            version: version.into(),
            updated_at,
            changes: changes.into(),
        }
    }
}
