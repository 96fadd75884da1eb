use strum::{Display, EnumString};

/// Marker animation.
///
/// The string representation matches the constant names
/// of the map widget (e.g. `google.maps.Animation.BOUNCE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Animation {
    #[default]
    None,
    Bounce,
    Drop,
}

impl Animation {
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_constant_names() {
        assert_eq!("BOUNCE", Animation::Bounce.to_string());
        assert_eq!("DROP", Animation::Drop.to_string());
        assert_eq!(Ok(Animation::Bounce), "BOUNCE".parse());
    }
}
