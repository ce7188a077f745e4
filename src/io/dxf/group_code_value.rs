//! Group code value types
//!
//! Determines how to interpret the value line that follows a group code.

/// Type of value associated with a group code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupCodeValueType {
    /// Unknown range
    None,
    /// String value
    String,
    /// Boolean value (0 or 1)
    Bool,
    /// 8-bit integer
    Byte,
    /// 16-bit signed integer
    Int16,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// Double-precision floating-point
    Double,
    /// Object handle (hex string)
    Handle,
}

impl GroupCodeValueType {
    /// Determine the value type from a raw integer group code.
    pub fn from_code(code: i32) -> Self {
        match code {
            0..=4 | 6..=9 | 100..=109 | 300..=309 | 410..=419 | 430..=439 | 470..=479 | 999
            | 1000..=1003 | 1006..=1009 => GroupCodeValueType::String,
            5 | 320..=369 | 390..=399 | 480..=481 | 1005 => GroupCodeValueType::Handle,
            10..=59 | 110..=149 | 210..=239 | 460..=469 | 1010..=1059 => GroupCodeValueType::Double,
            60..=79 | 170..=179 | 270..=279 | 370..=389 | 400..=409 | 1060..=1070 => {
                GroupCodeValueType::Int16
            }
            280..=289 => GroupCodeValueType::Byte,
            90..=99 | 420..=429 | 440..=459 | 1071 => GroupCodeValueType::Int32,
            160..=169 => GroupCodeValueType::Int64,
            290..=299 => GroupCodeValueType::Bool,
            _ => GroupCodeValueType::None,
        }
    }
}

impl std::fmt::Display for GroupCodeValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GroupCodeValueType::None => "untyped",
            GroupCodeValueType::String => "string",
            GroupCodeValueType::Bool => "boolean",
            GroupCodeValueType::Byte => "byte",
            GroupCodeValueType::Int16 => "int16",
            GroupCodeValueType::Int32 => "int32",
            GroupCodeValueType::Int64 => "int64",
            GroupCodeValueType::Double => "double",
            GroupCodeValueType::Handle => "handle",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_relevant_codes() {
        assert_eq!(GroupCodeValueType::from_code(0), GroupCodeValueType::String);
        assert_eq!(GroupCodeValueType::from_code(5), GroupCodeValueType::Handle);
        assert_eq!(GroupCodeValueType::from_code(8), GroupCodeValueType::String);
        assert_eq!(GroupCodeValueType::from_code(42), GroupCodeValueType::Double);
        assert_eq!(GroupCodeValueType::from_code(62), GroupCodeValueType::Int16);
        assert_eq!(GroupCodeValueType::from_code(92), GroupCodeValueType::Int32);
        assert_eq!(GroupCodeValueType::from_code(100), GroupCodeValueType::String);
        assert_eq!(GroupCodeValueType::from_code(230), GroupCodeValueType::Double);
        assert_eq!(GroupCodeValueType::from_code(281), GroupCodeValueType::Byte);
        assert_eq!(GroupCodeValueType::from_code(330), GroupCodeValueType::Handle);
        assert_eq!(GroupCodeValueType::from_code(999), GroupCodeValueType::String);
        assert_eq!(GroupCodeValueType::from_code(9999), GroupCodeValueType::None);
    }

    #[test]
    fn test_display_names_the_type() {
        assert_eq!(GroupCodeValueType::from_code(40).to_string(), "double");
        assert_eq!(GroupCodeValueType::from_code(330).to_string(), "handle");
    }
}
