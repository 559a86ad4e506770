/// primitive scalar tags; two equal tags r the same canonical primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicType {
    Bool,
    Char,
    Uchar,
    Short,
    Ushort,
    Int,
    Uint,
    Long,
    Ulong,
    Cent,
    Ucent,
    Half,
    Bhalf,
    Float,
    Double,
}

impl BasicType {
    pub fn size_bits(&self) -> u64 {
        match self {
            BasicType::Bool => 1,
            BasicType::Char | BasicType::Uchar => 8,
            BasicType::Short | BasicType::Ushort | BasicType::Half | BasicType::Bhalf => 16,
            BasicType::Int | BasicType::Uint | BasicType::Float => 32,
            BasicType::Long | BasicType::Ulong | BasicType::Double => 64,
            BasicType::Cent | BasicType::Ucent => 128,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(
            self,
            BasicType::Float | BasicType::Double | BasicType::Half | BasicType::Bhalf
        )
    }

    pub fn is_integer(&self) -> bool {
        !self.is_float() && !matches!(self, BasicType::Bool)
    }

    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            BasicType::Char
                | BasicType::Short
                | BasicType::Int
                | BasicType::Long
                | BasicType::Cent
        ) || self.is_float()
    }

    pub fn name(&self) -> &'static str {
        match self {
            BasicType::Bool => "bool",
            BasicType::Char => "char",
            BasicType::Uchar => "uchar",
            BasicType::Short => "short",
            BasicType::Ushort => "ushort",
            BasicType::Int => "int",
            BasicType::Uint => "uint",
            BasicType::Long => "long",
            BasicType::Ulong => "ulong",
            BasicType::Cent => "cent",
            BasicType::Ucent => "ucent",
            BasicType::Half => "half",
            BasicType::Bhalf => "bhalf",
            BasicType::Float => "float",
            BasicType::Double => "double",
        }
    }

    pub fn from_name(id: &str) -> Option<BasicType> {
        Some(match id {
            "bool" => BasicType::Bool,
            "char" => BasicType::Char,
            "uchar" => BasicType::Uchar,
            "short" => BasicType::Short,
            "ushort" => BasicType::Ushort,
            "int" => BasicType::Int,
            "uint" => BasicType::Uint,
            "long" => BasicType::Long,
            "ulong" => BasicType::Ulong,
            "cent" => BasicType::Cent,
            "ucent" => BasicType::Ucent,
            "half" => BasicType::Half,
            "bhalf" => BasicType::Bhalf,
            "float" => BasicType::Float,
            "double" => BasicType::Double,
            _ => return None,
        })
    }
}
