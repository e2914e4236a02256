use std::fmt;

use alloy_primitives::Bytes;
use serde::{de, Deserialize, Deserializer};

/// Accepts either `"a, b, c"` (handy for env vars) or a proper sequence
pub fn deserialize_vec_string<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrVec;

    impl<'de> de::Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a comma-separated string or a sequence of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Vec<String>, E>
        where
            E: de::Error,
        {
            Ok(value
                .split(',')
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .collect())
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Vec<String>, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut vec = Vec::with_capacity(seq.size_hint().unwrap_or_default());
            while let Some(elem) = seq.next_element()? {
                vec.push(elem);
            }
            Ok(vec)
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Creation bytecode as written by either Hardhat (`"0x..."`) or Foundry (`{"object": "0x..."}`)
pub fn deserialize_bytecode<'de, D>(deserializer: D) -> Result<Bytes, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AnyBytecode {
        Hex(String),
        Object { object: String },
    }

    let hex = match AnyBytecode::deserialize(deserializer)? {
        AnyBytecode::Hex(hex) => hex,
        AnyBytecode::Object { object } => object,
    };

    // unlinked library placeholders look like `__$abc$__` and are not hex
    const_hex::decode(hex.trim())
        .map(Bytes::from)
        .map_err(|e| de::Error::custom(format!("invalid bytecode hex: {e}")))
}
