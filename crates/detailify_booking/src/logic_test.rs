#[cfg(test)]
mod tests {
    use crate::catalog::FLAT_SELECTION;
    use crate::logic::{
        apply_event, available_slots, business_window, format_euros, quote,
        render_appointment_email, set_selection, total_duration_minutes, total_price_cents,
        BookingError,
    };
    use crate::models::{BookingRequest, FormEvent, SelectedService};
    use chrono::NaiveDate;
    use detailify_config::BookingConfig;

    fn selection(title: &str, option: &str) -> SelectedService {
        SelectedService {
            title: title.to_string(),
            option: option.to_string(),
        }
    }

    // --- Selection toggle ---

    #[test]
    fn select_then_deselect_restores_the_set() {
        let mut selections = vec![selection("Interieur Reiniging", "Basis")];
        let before = selections.clone();

        set_selection(&mut selections, "Auto Polijsten", "Premium");
        set_selection(&mut selections, "Auto Polijsten", "");

        assert_eq!(selections, before);
    }

    #[test]
    fn reselecting_a_different_tier_replaces_not_duplicates() {
        let mut selections = vec![selection("Exterieur Reiniging", "Basis")];

        set_selection(&mut selections, "Exterieur Reiniging", "Deluxe");

        assert_eq!(selections.len(), 1);
        assert_eq!(selections[0].option, "Deluxe");
    }

    #[test]
    fn deselecting_an_unselected_title_is_a_noop() {
        let mut selections = vec![selection("Exterieur Reiniging", "Basis")];
        let before = selections.clone();

        set_selection(&mut selections, "Koplampen Polijsten", "");

        assert_eq!(selections, before);
    }

    #[test]
    fn flat_entries_toggle_with_the_sentinel() {
        let mut selections = Vec::new();

        set_selection(&mut selections, "Koplampen Polijsten", FLAT_SELECTION);
        assert_eq!(selections.len(), 1);
        assert_eq!(selections[0].option, FLAT_SELECTION);

        set_selection(&mut selections, "Koplampen Polijsten", "");
        assert!(selections.is_empty());
    }

    // --- Aggregation ---

    #[test]
    fn premium_exterior_plus_headlights_totals() {
        // Exterieur Premium is EUR 79.99 / 90 min, Koplampen flat EUR 59.99 / 45 min.
        let selections = vec![
            selection("Exterieur Reiniging", "Premium"),
            selection("Koplampen Polijsten", FLAT_SELECTION),
        ];

        assert_eq!(total_price_cents(&selections).unwrap(), 13998);
        assert_eq!(total_duration_minutes(&selections).unwrap(), 135);

        let summary = quote(&selections).unwrap();
        assert_eq!(summary.total_price, "139.98");
        assert_eq!(summary.total_duration_minutes, 135);
    }

    #[test]
    fn totals_do_not_depend_on_selection_order() {
        let forward = vec![
            selection("Exterieur Reiniging", "Premium"),
            selection("Interieur Reiniging", "Deluxe"),
            selection("Maandelijkse Reiniging", FLAT_SELECTION),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        assert_eq!(
            total_price_cents(&forward).unwrap(),
            total_price_cents(&backward).unwrap()
        );
        assert_eq!(
            total_duration_minutes(&forward).unwrap(),
            total_duration_minutes(&backward).unwrap()
        );
    }

    #[test]
    fn empty_selection_totals_to_zero() {
        assert_eq!(total_price_cents(&[]).unwrap(), 0);
        assert_eq!(total_duration_minutes(&[]).unwrap(), 0);
    }

    #[test]
    fn unknown_service_fails_loudly_instead_of_skipping() {
        let selections = vec![
            selection("Exterieur Reiniging", "Premium"),
            selection("Motorruimte Reiniging", "Basis"),
        ];

        match total_price_cents(&selections) {
            Err(BookingError::UnknownService(title)) => {
                assert_eq!(title, "Motorruimte Reiniging")
            }
            other => panic!("expected UnknownService, got {:?}", other),
        }
    }

    #[test]
    fn unknown_option_fails_loudly_instead_of_skipping() {
        let selections = vec![selection("Auto Polijsten", "Platinum")];

        match total_duration_minutes(&selections) {
            Err(BookingError::UnknownOption { service, option }) => {
                assert_eq!(service, "Auto Polijsten");
                assert_eq!(option, "Platinum");
            }
            other => panic!("expected UnknownOption, got {:?}", other),
        }
    }

    #[test]
    fn format_euros_pads_cents() {
        assert_eq!(format_euros(13998), "139.98");
        assert_eq!(format_euros(5000), "50.00");
        assert_eq!(format_euros(45), "0.45");
    }

    // --- Time-slot derivation ---

    #[test]
    fn saturday_gets_the_full_day_window() {
        // 2026-05-09 is a Saturday.
        let slots = available_slots("2026-05-09", &BookingConfig::default());

        assert_eq!(slots.first().map(String::as_str), Some("08:00"));
        assert_eq!(slots.last().map(String::as_str), Some("21:30"));
        assert_eq!(slots.len(), 28);
    }

    #[test]
    fn sunday_gets_the_full_day_window() {
        // 2026-05-10 is a Sunday.
        let slots = available_slots("2026-05-10", &BookingConfig::default());
        assert_eq!(slots.len(), 28);
        assert_eq!(slots.first().map(String::as_str), Some("08:00"));
    }

    #[test]
    fn tuesday_gets_the_evening_window() {
        // 2026-05-05 is a Tuesday.
        let slots = available_slots("2026-05-05", &BookingConfig::default());

        assert_eq!(slots.first().map(String::as_str), Some("18:30"));
        assert_eq!(slots.last().map(String::as_str), Some("21:30"));
        assert_eq!(slots.len(), 7);
    }

    #[test]
    fn the_day_end_is_exclusive() {
        for date in ["2026-05-05", "2026-05-09", "2026-05-10"] {
            let slots = available_slots(date, &BookingConfig::default());
            assert!(!slots.iter().any(|slot| slot == "22:00"), "{}", date);
        }
    }

    #[test]
    fn unparseable_dates_yield_no_slots() {
        let config = BookingConfig::default();
        assert!(available_slots("", &config).is_empty());
        assert!(available_slots("gisteren", &config).is_empty());
        assert!(available_slots("2026-13-40", &config).is_empty());
    }

    #[test]
    fn unaligned_window_start_skips_the_partial_interval() {
        let config = BookingConfig {
            weekday_start: "18:45".to_string(),
            ..BookingConfig::default()
        };
        // A Tuesday; 18:45 is off-grid, so the first slot is 19:00.
        let slots = available_slots("2026-05-05", &config);
        assert_eq!(slots.first().map(String::as_str), Some("19:00"));
    }

    #[test]
    fn malformed_config_times_fall_back_to_defaults() {
        let config = BookingConfig {
            weekday_start: "half zeven".to_string(),
            weekend_start: "dawn".to_string(),
            day_end: "late".to_string(),
            slot_step_minutes: 30,
        };
        let tuesday = NaiveDate::from_ymd_opt(2026, 5, 5).unwrap();
        let saturday = NaiveDate::from_ymd_opt(2026, 5, 9).unwrap();

        let (weekday_start, weekday_end) = business_window(tuesday, &config);
        assert_eq!(weekday_start.format("%H:%M").to_string(), "18:30");
        assert_eq!(weekday_end.format("%H:%M").to_string(), "22:00");

        let (weekend_start, _) = business_window(saturday, &config);
        assert_eq!(weekend_start.format("%H:%M").to_string(), "08:00");
    }

    // --- Form session reducer ---

    #[test]
    fn apply_event_sets_scalar_fields() {
        let state = BookingRequest::default();
        let state = apply_event(state, FormEvent::FirstName("Rik".to_string()));
        let state = apply_event(state, FormEvent::LastName("Mulder".to_string()));
        let state = apply_event(state, FormEvent::Email("rik@example.nl".to_string()));
        let state = apply_event(state, FormEvent::LicensePlate("XX-123-Y".to_string()));
        let state = apply_event(state, FormEvent::Date("2026-05-09".to_string()));
        let state = apply_event(state, FormEvent::Time("08:00".to_string()));

        assert_eq!(state.first_name, "Rik");
        assert_eq!(state.last_name, "Mulder");
        assert_eq!(state.email, "rik@example.nl");
        assert_eq!(state.license_plate, "XX-123-Y");
        assert_eq!(state.date, "2026-05-09");
        assert_eq!(state.time, "08:00");
        assert!(state.selected_services.is_empty());
    }

    #[test]
    fn apply_event_routes_service_toggles_through_set_selection() {
        let state = BookingRequest::default();
        let state = apply_event(
            state,
            FormEvent::SelectService {
                title: "Exterieur Reiniging".to_string(),
                option: "Basis".to_string(),
            },
        );
        let state = apply_event(
            state,
            FormEvent::SelectService {
                title: "Exterieur Reiniging".to_string(),
                option: "Premium".to_string(),
            },
        );

        assert_eq!(state.selected_services.len(), 1);
        assert_eq!(state.selected_services[0].option, "Premium");
    }

    // --- Email rendering ---

    #[test]
    fn appointment_email_lists_services_and_totals() {
        let mut request = BookingRequest {
            first_name: "Rik".to_string(),
            last_name: "Mulder".to_string(),
            email: "rik@example.nl".to_string(),
            phone: "+31 6 1234 5678".to_string(),
            license_plate: "XX-123-Y".to_string(),
            date: "2026-05-09".to_string(),
            time: "08:00".to_string(),
            comments: "Graag voor 12:00 klaar.".to_string(),
            ..BookingRequest::default()
        };
        request.selected_services = vec![
            selection("Exterieur Reiniging", "Premium"),
            selection("Koplampen Polijsten", FLAT_SELECTION),
        ];

        let (subject, body) = render_appointment_email(&request).unwrap();
        assert!(subject.contains("Rik Mulder"));
        assert!(body.contains("Exterieur Reiniging (Premium): EUR 79.99 (90 min)"));
        assert!(body.contains("Totale prijs: EUR 139.98 | Geschatte tijd: 135 minuten"));
        assert!(body.contains("Datum: 2026-05-09 om 08:00"));
        assert!(body.contains("Graag voor 12:00 klaar."));
    }

    #[test]
    fn appointment_email_fails_on_desynced_selection() {
        let request = BookingRequest {
            selected_services: vec![selection("Motorruimte Reiniging", "Basis")],
            ..BookingRequest::default()
        };
        assert!(matches!(
            render_appointment_email(&request),
            Err(BookingError::UnknownService(_))
        ));
    }
}
