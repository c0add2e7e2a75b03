//! Protocol enumerations with their wire spellings.

use std::fmt;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// The value sent on the wire.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(format!(
                        "unknown {} '{}'",
                        stringify!($name),
                        other
                    )),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

wire_enum! {
    /// Which relationships to include with returned objects.
    IncludeRelationships {
        None => "none",
        Source => "source",
        Target => "target",
        Both => "both",
    }
}

wire_enum! {
    /// Which version of a document `getObject`/`getProperties` returns.
    ReturnVersion {
        This => "this",
        Latest => "latest",
        LatestMajor => "latestmajor",
    }
}

wire_enum! {
    /// Versioning state of a newly created document.
    VersioningState {
        None => "none",
        Major => "major",
        Minor => "minor",
        CheckedOut => "checkedout",
    }
}

wire_enum! {
    /// What `deleteTree` does with objects filed elsewhere.
    UnfileObjects {
        Unfile => "unfile",
        DeleteSingleFiled => "deletesinglefiled",
        Delete => "delete",
    }
}

wire_enum! {
    /// Content-Disposition requested for content downloads.
    Download {
        Attachment => "attachment",
        Inline => "inline",
    }
}

wire_enum! {
    /// Relationship direction relative to the given object.
    RelationshipDirection {
        Source => "source",
        Target => "target",
        Either => "either",
    }
}

wire_enum! {
    /// How an ACL change propagates.
    AclPropagation {
        ObjectOnly => "objectonly",
        Propagate => "propagate",
        RepositoryDetermined => "repositorydetermined",
    }
}

impl Default for Download {
    fn default() -> Self {
        Download::Inline
    }
}

impl Default for RelationshipDirection {
    fn default() -> Self {
        RelationshipDirection::Either
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_spellings() {
        assert_eq!(ReturnVersion::LatestMajor.as_str(), "latestmajor");
        assert_eq!(VersioningState::CheckedOut.to_string(), "checkedout");
        assert_eq!(UnfileObjects::DeleteSingleFiled.as_str(), "deletesinglefiled");
        assert_eq!(AclPropagation::RepositoryDetermined.as_str(), "repositorydetermined");
    }

    #[test]
    fn parse_from_wire() {
        assert_eq!("both".parse::<IncludeRelationships>(), Ok(IncludeRelationships::Both));
        assert!("sideways".parse::<RelationshipDirection>().is_err());
    }

    #[test]
    fn defaults_match_protocol() {
        assert_eq!(Download::default(), Download::Inline);
        assert_eq!(RelationshipDirection::default(), RelationshipDirection::Either);
    }
}
