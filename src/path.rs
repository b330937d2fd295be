//! Where a value sits inside the input, for error messages.

use std::fmt;

/// One step below a path's root.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, ".{key}"),
            PathSegment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// The name of a location in a nested value, such as `user.tags[0]`.
///
/// A path is a caller-chosen root name followed by `.key` steps into objects
/// and `[index]` steps into arrays. Extending a path returns a new one.
///
/// # Example
///
/// ```rust
/// use mustbe::ValuePath;
///
/// let users = ValuePath::named("users");
/// let email = users.index(0).field("email");
///
/// assert_eq!(users.to_string(), "users");
/// assert_eq!(email.to_string(), "users[0].email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuePath {
    root: String,
    steps: Vec<PathSegment>,
}

impl ValuePath {
    /// Starts a path at `name`, used verbatim.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            root: name.into(),
            steps: Vec::new(),
        }
    }

    /// The path of the object field `key` under this one.
    pub fn field(&self, key: impl Into<String>) -> Self {
        self.step(PathSegment::Key(key.into()))
    }

    /// The path of the array element `index` under this one.
    pub fn index(&self, index: usize) -> Self {
        self.step(PathSegment::Index(index))
    }

    fn step(&self, segment: PathSegment) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend(self.steps.iter().cloned());
        steps.push(segment);
        Self {
            root: self.root.clone(),
            steps,
        }
    }
}

impl From<&str> for ValuePath {
    fn from(name: &str) -> Self {
        ValuePath::named(name)
    }
}

impl From<String> for ValuePath {
    fn from(name: String) -> Self {
        ValuePath::named(name)
    }
}

impl From<&ValuePath> for ValuePath {
    fn from(path: &ValuePath) -> Self {
        path.clone()
    }
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root)?;
        self.steps.iter().try_for_each(|step| step.fmt(f))
    }
}
