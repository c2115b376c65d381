//! Screen identifiers and keycap navigation.

use std::fmt;

/// One console screen per admin resource, navigable by keycap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Animals, // 1
    Users,    // 2
    Breeds,   // 3
    Types,    // 4
    Trackers, // 5
    Fences,   // 6
    Zones,    // 7
    Orders,   // 8
    Plans,    // 9
    Slides,   // 0
    /// Legal content preview — reachable only by Tab cycling.
    Pages,
}

impl ScreenId {
    /// All screens in tab-bar order.
    pub const ALL: [ScreenId; 11] = [
        Self::Animals,
        Self::Users,
        Self::Breeds,
        Self::Types,
        Self::Trackers,
        Self::Fences,
        Self::Zones,
        Self::Orders,
        Self::Plans,
        Self::Slides,
        Self::Pages,
    ];

    /// Keycap that jumps directly to this screen, when one is assigned.
    pub fn keycap(self) -> Option<char> {
        match self {
            Self::Animals => Some('1'),
            Self::Users => Some('2'),
            Self::Breeds => Some('3'),
            Self::Types => Some('4'),
            Self::Trackers => Some('5'),
            Self::Fences => Some('6'),
            Self::Zones => Some('7'),
            Self::Orders => Some('8'),
            Self::Plans => Some('9'),
            Self::Slides => Some('0'),
            Self::Pages => None,
        }
    }

    /// Screen for a pressed digit key.
    pub fn from_keycap(c: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.keycap() == Some(c))
    }

    /// Next screen in tab order (wraps around).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous screen in tab order (wraps around).
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Short label for the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Animals => "Animals",
            Self::Users => "Users",
            Self::Breeds => "Breeds",
            Self::Types => "Types",
            Self::Trackers => "Trackers",
            Self::Fences => "Fences",
            Self::Zones => "Zones",
            Self::Orders => "Orders",
            Self::Plans => "Plans",
            Self::Slides => "Slides",
            Self::Pages => "Pages",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keycaps_round_trip() {
        for screen in ScreenId::ALL {
            if let Some(c) = screen.keycap() {
                assert_eq!(ScreenId::from_keycap(c), Some(screen));
            }
        }
        assert_eq!(ScreenId::from_keycap('x'), None);
    }

    #[test]
    fn tab_order_wraps_in_both_directions() {
        assert_eq!(ScreenId::Pages.next(), ScreenId::Animals);
        assert_eq!(ScreenId::Animals.prev(), ScreenId::Pages);

        let mut screen = ScreenId::Animals;
        for _ in 0..ScreenId::ALL.len() {
            screen = screen.next();
        }
        assert_eq!(screen, ScreenId::Animals);
    }
}
