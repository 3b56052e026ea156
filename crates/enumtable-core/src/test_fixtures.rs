use enumtable_derive::{EnumKind, TableModel};

///
/// Status
///
/// Plain enum with partial descriptions.
///

#[derive(Clone, Copy, Debug, EnumKind, Eq, PartialEq)]
pub enum Status {
    #[enum_kind(description = "正常")]
    Normal,
    #[enum_kind(description = "待机")]
    Standby,
    #[enum_kind(description = "离线")]
    Offline,
    Online,
    Fault,
}

///
/// Protocol
///
/// Flag set; `Mqtt`'s description itself contains a comma.
///

#[derive(Clone, Copy, Debug, EnumKind, Eq, PartialEq)]
#[enum_kind(flags)]
#[enum_kind(member(name = "Http", value = 1, description = "Http协议"))]
#[enum_kind(member(name = "Udp", value = 2, description = "Udp协议"))]
#[enum_kind(member(name = "HttpAndUdp", value = 3, description = "Http协议,Udp协议"))]
#[enum_kind(member(name = "Tcp", value = 4, description = "Tcp协议"))]
#[enum_kind(member(name = "Mqtt", value = 8, description = "Mqtt,Http协议"))]
pub struct Protocol(u8);

///
/// Level
///
/// Signed representation with a negative member.
///

#[derive(Clone, Copy, Debug, EnumKind, Eq, PartialEq)]
#[repr(i8)]
pub enum Level {
    Low = -1,
    Mid,
    High,
}

///
/// Wide
///

#[derive(Clone, Copy, Debug, EnumKind, Eq, PartialEq)]
#[repr(u64)]
pub enum Wide {
    Small = 1,
    Huge = 18_446_744_073_709_551_615,
}

///
/// Access
///
/// Flag set over a signed integer with a zero member and a negative member.
///

#[derive(Clone, Copy, Debug, EnumKind, Eq, PartialEq)]
#[enum_kind(flags)]
#[enum_kind(member(name = "None", value = 0))]
#[enum_kind(member(name = "Read", value = 1, description = "读"))]
#[enum_kind(member(name = "Write", value = 2, description = "写"))]
#[enum_kind(member(name = "Invalid", value = -4))]
pub struct Access(i16);

///
/// Student
///

#[derive(Clone, Debug, Default, PartialEq, TableModel)]
pub struct Student {
    #[table(name = "标识")]
    pub id: i64,
    #[table(name = "姓名")]
    pub name: String,
    pub age: f64,
    pub status: Option<Status>,
    #[table(skip)]
    pub note: String,
}

impl Student {
    pub fn new(id: i64, name: &str, age: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            age,
            ..Self::default()
        }
    }
}

///
/// Pair
///
/// Generic record; field types are resolved per instantiation.
///

#[derive(Clone, Debug, Default, PartialEq, TableModel)]
pub struct Pair<T> {
    pub left: T,
    pub right: T,
}
