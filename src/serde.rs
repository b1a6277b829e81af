//! Impl the `serde::Serialize` and `serde::Deserialize` traits.

use crate::KeyPath;
use std::fmt::Formatter;

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl serde::Serialize for KeyPath {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let mut buf = String::new();
        self.format_to(&mut buf).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&buf)
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> serde::Deserialize<'de> for KeyPath {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        struct KeyPathVisitor;

        impl<'de> serde::de::Visitor<'de> for KeyPathVisitor {
            type Value = KeyPath;

            #[inline]
            fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
                write!(formatter, "a path notation string")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<KeyPath, E>
            where
                E: serde::de::Error,
            {
                Ok(KeyPath::from(v))
            }
        }

        deserializer.deserialize_str(KeyPathVisitor)
    }
}
