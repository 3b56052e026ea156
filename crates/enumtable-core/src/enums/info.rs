use crate::model::{EnumDescriptor, MemberDescriptor};

///
/// EnumTypeInfo
///
/// Per-type metadata derived once from an `EnumDescriptor` and shared
/// read-only afterwards.
///
/// mask → OR of every non-negative member value; zero for plain enums
///

#[derive(Debug)]
pub struct EnumTypeInfo {
    pub is_flags: bool,
    pub mask: u64,
    pub members: &'static [MemberDescriptor],
    descriptor: &'static EnumDescriptor,
}

impl EnumTypeInfo {
    #[must_use]
    pub fn new(descriptor: &'static EnumDescriptor) -> Self {
        let mask = if descriptor.flags {
            descriptor
                .members
                .iter()
                .filter_map(MemberDescriptor::flag_bits)
                .fold(0, |acc, bits| acc | bits)
        } else {
            0
        };

        Self {
            is_flags: descriptor.flags,
            mask,
            members: descriptor.members,
            descriptor,
        }
    }

    #[must_use]
    pub const fn descriptor(&self) -> &'static EnumDescriptor {
        self.descriptor
    }

    #[must_use]
    pub const fn ident(&self) -> &'static str {
        self.descriptor.ident
    }

    /// True when every bit of `raw` belongs to some declared flag.
    #[must_use]
    pub fn covers(&self, raw: i128) -> bool {
        self.is_flags && u64::try_from(raw).is_ok_and(|bits| bits & !self.mask == 0)
    }

    /// Declared member, or (flags only) a combination within the mask.
    /// The value must also fit the underlying integer.
    #[must_use]
    pub fn accepts(&self, raw: i128) -> bool {
        self.descriptor.repr.contains(raw) && (self.descriptor.is_defined(raw) || self.covers(raw))
    }

    ///
    /// NAMES
    ///

    /// String form of a raw value.
    ///
    /// Exact member name first; then, for flag sets, the member names whose
    /// bits decompose the value, ascending and joined by `", "`; otherwise
    /// the decimal number.
    #[must_use]
    pub fn canonical_name(&self, raw: i128) -> String {
        if let Some(member) = self.descriptor.member_by_value(raw) {
            return member.name.to_string();
        }

        if self.is_flags
            && let Some(name) = self.flag_name(raw)
        {
            return name;
        }

        raw.to_string()
    }

    // greedy decomposition over non-zero members, largest value first
    fn flag_name(&self, raw: i128) -> Option<String> {
        let mut remaining = u64::try_from(raw).ok().filter(|bits| *bits != 0)?;

        let mut candidates: Vec<(u64, &'static str)> = self
            .members
            .iter()
            .filter_map(|m| m.flag_bits().filter(|b| *b != 0).map(|b| (b, m.name)))
            .collect();
        candidates.sort_by(|a, b| b.0.cmp(&a.0));

        let mut taken = Vec::new();
        for (bits, name) in candidates {
            if remaining & bits == bits {
                remaining &= !bits;
                taken.push(name);
            }
        }

        if remaining != 0 {
            return None;
        }

        taken.reverse();

        Some(taken.join(", "))
    }

    /// Resolve a declared name, or (flags only) a comma-separated list of
    /// declared names, to a raw value within the mask.
    #[must_use]
    pub fn value_of_name(&self, name: &str) -> Option<i128> {
        if let Some(member) = self.descriptor.member_by_name(name) {
            return Some(member.value);
        }

        if !self.is_flags {
            return None;
        }

        let mut bits = 0u64;
        for segment in name.split(',') {
            let member = self.descriptor.member_by_name(segment.trim())?;
            // negative members only resolve on their own
            bits |= member.flag_bits()?;
        }

        let raw = i128::from(bits);

        self.covers(raw).then_some(raw)
    }

    ///
    /// DESCRIPTIONS
    ///

    /// Uncached description of a raw value: each segment of the canonical
    /// name becomes its member's description (or name); unknown segments
    /// become empty strings.
    #[must_use]
    pub fn description(&self, raw: i128) -> String {
        self.canonical_name(raw)
            .split(',')
            .map(|segment| {
                self.descriptor
                    .member_by_name(segment.trim())
                    .map_or("", MemberDescriptor::description_or_name)
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Description a single member resolves to. Aliased values resolve to
    /// the first member declared with that value.
    #[must_use]
    pub fn member_description(&self, member: &MemberDescriptor) -> &'static str {
        self.descriptor
            .member_by_value(member.value)
            .map_or("", MemberDescriptor::description_or_name)
    }

    /// Resolve a description to a raw value.
    ///
    /// Exact member descriptions win (a description may itself contain a
    /// comma). Flag sets then accept a comma-separated list in which every
    /// segment matches some member exactly.
    #[must_use]
    pub fn value_of_desc(&self, desc: &str) -> Option<i128> {
        if let Some(member) = self
            .members
            .iter()
            .find(|m| self.member_description(m) == desc)
        {
            return Some(member.value);
        }

        if !self.is_flags || !desc.contains(',') {
            return None;
        }

        let mut bits = 0u64;
        for segment in desc.split(',') {
            let member = self
                .members
                .iter()
                .find(|m| self.member_description(m) == segment)?;
            bits |= member.flag_bits().unwrap_or(0);
        }

        let raw = i128::from(bits);

        self.accepts(raw).then_some(raw)
    }
}
