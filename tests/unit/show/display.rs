//! Tests for display identifiers

#[cfg(test)]
mod tests {
    use cinetile::CinetileError;
    use cinetile::show::display::DisplayId;
    use std::collections::HashSet;

    // Tests there are twenty-six uniquely named displays in order
    // Verified by duplicating a display name
    #[test]
    fn test_all_displays() {
        assert_eq!(DisplayId::ALL.len(), 26);

        let names: HashSet<&str> = DisplayId::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(names.len(), 26);

        assert_eq!(DisplayId::ALL.first(), Some(&DisplayId::ScreenAlpha));
        assert_eq!(DisplayId::ALL.last(), Some(&DisplayId::ScreenZulu));
        assert!(DisplayId::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    }

    // Tests names parse back and unknown names are rejected
    // Verified by parsing the readable name instead
    #[test]
    fn test_parse() {
        for display in DisplayId::ALL {
            assert_eq!(display.name().parse::<DisplayId>().unwrap(), *display);
        }
        assert!(matches!(
            "screen_omega".parse::<DisplayId>(),
            Err(CinetileError::UnknownDisplay { name }) if name == "screen_omega"
        ));
    }

    // Tests readable names are title-cased words
    // Verified by keeping the underscore
    #[test]
    fn test_readable_name() {
        assert_eq!(DisplayId::ScreenAlpha.readable_name(), "Screen Alpha");
        assert_eq!(DisplayId::ScreenXray.readable_name(), "Screen Xray");
    }

    // Tests JSON representation uses the serialized name
    // Verified by removing the snake_case rename
    #[test]
    fn test_json_form() {
        let json = serde_json::to_string(&DisplayId::ScreenHotel).unwrap();
        assert_eq!(json, "\"screen_hotel\"");

        let parsed: DisplayId = serde_json::from_str("\"screen_kilo\"").unwrap();
        assert_eq!(parsed, DisplayId::ScreenKilo);
        assert_eq!(parsed.to_string(), "screen_kilo");
    }
}
