//! Field paths used to locate a value inside a model payload.

use std::fmt;

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Named model property, rendered as `name` or `.name`.
    Property(String),
    /// Dictionary key, rendered as `[key]`.
    Key(String),
}

impl Segment {
    fn as_str(&self) -> &str {
        match self {
            Segment::Property(s) | Segment::Key(s) => s,
        }
    }
}

/// Path of a value inside a serialized model, e.g. `defaultProgram[a]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// Path starting at the model property with wire name `name`.
    pub fn property(name: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Property(name.into())],
        }
    }

    pub fn child(&self, name: impl Into<String>) -> Self {
        self.with(Segment::Property(name.into()))
    }

    pub fn key(&self, key: impl Into<String>) -> Self {
        self.with(Segment::Key(key.into()))
    }

    fn with(&self, segment: Segment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// RFC 6901 pointer to the same location.
    ///
    /// - `defaultProgram[a]` -> `/defaultProgram/a`
    /// - `defaultProgram[a/b]` -> `/defaultProgram/a~1b`
    pub fn to_pointer(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            out.push_str(&escape_pointer_component(segment.as_str()));
        }
        out
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Property(name) if i == 0 => f.write_str(name)?,
                Segment::Property(name) => write!(f, ".{name}")?,
                Segment::Key(key) => write!(f, "[{key}]")?,
            }
        }
        Ok(())
    }
}

fn escape_pointer_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}
