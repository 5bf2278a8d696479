/// A capability tag for the dynamic values a sequence can hold.
///
/// Tags form a small derivation hierarchy rooted at `Any`. A value
/// whose tag is `Integer` also conforms to `Numeric`, so a matcher for
/// `Numeric` accepts integers and doubles alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Any,
    Nil,
    Boolean,
    Numeric,
    Integer,
    Double,
    String,
    Pair,
}

impl Tag {
    pub fn by_name(name: &str) -> Option<Self> {
        use Tag::*;
        let tag = match name {
            "any" => Any,
            "nil" => Nil,
            "boolean" => Boolean,
            "numeric" => Numeric,
            "integer" => Integer,
            "double" => Double,
            "string" => String,
            "pair" => Pair,
            _ => return None,
        };
        Some(tag)
    }

    pub fn name(&self) -> &str {
        use Tag::*;
        match self {
            Any => "any",
            Nil => "nil",
            Boolean => "boolean",
            Numeric => "numeric",
            Integer => "integer",
            Double => "double",
            String => "string",
            Pair => "pair",
        }
    }

    pub fn parent(&self) -> Option<Tag> {
        use Tag::*;
        match self {
            Any => None,
            Nil => Some(Any),
            Boolean => Some(Any),
            Numeric => Some(Any),
            Integer => Some(Numeric),
            Double => Some(Numeric),
            String => Some(Any),
            Pair => Some(Any),
        }
    }

    /// Does this tag derive from the other tag?
    ///
    /// A tag derives from itself and from every tag on the path up to
    /// `Any`.
    pub fn derives_from(&self, other: Tag) -> bool {
        if *self == other {
            return true;
        }
        match self.parent() {
            Some(parent_tag) => parent_tag.derives_from(other),
            None => false,
        }
    }
}
