#[cfg(test)]
mod tests {
    use crate::core::catalog::OFFICE_SPACES;
    use crate::core::contact::SUCCESS_MESSAGE;
    use crate::core::reveal::testing::{ObserverCall, RecordingObserver};
    use crate::core::reveal::{IntersectionSample, RevealTransition};
    use crate::core::{
        BookingField, BookingSelection, BookingStep, ContactField, ContactForm, RevealController,
        RevealOptions, SiteError, SpaceFilter, SubmissionPhase, filter_spaces,
    };

    // ========================================================================
    // Office space browsing
    // ========================================================================

    #[test]
    fn test_private_filter_on_full_catalog() {
        let result = filter_spaces(OFFICE_SPACES, "private");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "private-office");
    }

    #[test]
    fn test_switching_filters_back_to_all() {
        let mut filter = SpaceFilter::new("coworking");
        assert_eq!(filter.apply(OFFICE_SPACES).len(), 1);

        filter = SpaceFilter::default();
        let ids: Vec<_> = filter.apply(OFFICE_SPACES).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["private-office", "meeting-room", "coworking-space"]);
    }

    // ========================================================================
    // Booking flow
    // ========================================================================

    #[test]
    fn test_booking_flow_end_to_end() {
        let mut selection = BookingSelection::default();
        assert!(selection.confirm(OFFICE_SPACES).is_err());

        selection.select_space("meeting-room");
        assert!(selection.shows_schedule_controls());
        selection.set_date("2024-06-01");
        selection.select_time_slot("10:00 AM");
        assert_eq!(selection.step(), BookingStep::TimeChosen);
        assert!(!selection.is_complete());

        selection.select_duration("2 hours");
        assert_eq!(selection.step(), BookingStep::ReadyToConfirm);

        let summary = selection.confirm(OFFICE_SPACES).unwrap().summary();
        for value in ["meeting-room", "2024-06-01", "10:00 AM", "2 hours"] {
            assert!(summary.contains(value), "summary is missing {value}");
        }
    }

    #[test]
    fn test_booking_without_date_is_blocked() {
        let mut selection = BookingSelection::default();
        selection.select_space("meeting-room");
        selection.select_time_slot("10:00 AM");
        selection.select_duration("2 hours");

        match selection.confirm(OFFICE_SPACES) {
            Err(SiteError::IncompleteBooking { missing }) => {
                assert_eq!(missing, vec![BookingField::Date]);
            }
            other => panic!("expected incomplete booking, got {other:?}"),
        }
        assert_eq!(selection.step(), BookingStep::DurationChosen);
    }

    #[test]
    fn test_confirm_enabled_iff_all_fields_filled() {
        let values = ["meeting-room", "2024-06-01", "10:00 AM", "2 hours"];
        for mask in 0u8..16 {
            let mut selection = BookingSelection::default();
            let pick = |bit: u8| mask & (1 << bit) != 0;
            if pick(0) {
                selection.select_space(values[0]);
            }
            if pick(1) {
                selection.set_date(values[1]);
            }
            if pick(2) {
                selection.select_time_slot(values[2]);
            }
            if pick(3) {
                selection.select_duration(values[3]);
            }
            assert_eq!(
                selection.confirm(OFFICE_SPACES).is_ok(),
                mask == 0b1111,
                "mask {mask:04b}"
            );
        }
    }

    // ========================================================================
    // Contact form
    // ========================================================================

    #[test]
    fn test_contact_submission_clears_form() {
        let mut form = ContactForm::default();
        for (name, value) in [
            ("name", "Grace Hopper"),
            ("email", "grace@example.com"),
            ("phone", "(555) 987-6543"),
            ("inquiryType", "partnership"),
            ("subject", "Event space"),
            ("message", "Do you host meetups?"),
        ] {
            let field = ContactField::from_name(name).unwrap();
            form.set_field(field, value);
        }

        let ticket = form.begin_submission().unwrap();
        assert_eq!(form.phase(), SubmissionPhase::Submitting);

        let ack = form.finish_submission(ticket).unwrap();
        assert_eq!(ack.message, SUCCESS_MESSAGE);
        assert_eq!(ack.submission.phone, "(555) 987-6543");
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert_eq!(form.field(ContactField::Message), "");
        assert_eq!(form.field(ContactField::InquiryType), "general");
    }

    #[test]
    fn test_contact_resubmit_after_finish() {
        let mut form = ContactForm::default();
        let fill = |form: &mut ContactForm| {
            form.set_field(ContactField::Name, "A");
            form.set_field(ContactField::Email, "a@example.com");
            form.set_field(ContactField::Subject, "Hi");
            form.set_field(ContactField::Message, "Hello");
        };

        fill(&mut form);
        let first = form.begin_submission().unwrap();
        form.finish_submission(first).unwrap();

        // Cleared form is rejected until filled again
        assert!(matches!(
            form.begin_submission(),
            Err(SiteError::IncompleteContact { .. })
        ));

        fill(&mut form);
        let second = form.begin_submission().unwrap();
        assert!(form.finish_submission(second).is_ok());
    }

    // ========================================================================
    // Reveal on scroll
    // ========================================================================

    #[test]
    fn test_reveal_fires_at_most_once() {
        let mut controller =
            RevealController::new(RecordingObserver::default(), RevealOptions::staggered(1));
        controller.start();

        let enter = IntersectionSample {
            is_intersecting: true,
            ratio: 0.4,
        };
        let leave = IntersectionSample {
            is_intersecting: false,
            ratio: 0.0,
        };

        let revealed = (0..5)
            .flat_map(|_| [enter, leave])
            .map(|sample| controller.on_intersection(sample))
            .filter(|t| *t == RevealTransition::Revealed)
            .count();
        assert_eq!(revealed, 1);

        controller.teardown();
        assert_eq!(
            controller.observer().calls,
            vec![
                ObserverCall::Observe,
                ObserverCall::Unobserve,
                ObserverCall::Disconnect
            ]
        );
    }

    #[test]
    fn test_reveal_controllers_are_independent() {
        let mut first = RevealController::new(RecordingObserver::default(), RevealOptions::default());
        let mut second =
            RevealController::new(RecordingObserver::default(), RevealOptions::default());
        first.start();
        second.start();

        first.on_intersection(IntersectionSample {
            is_intersecting: true,
            ratio: 1.0,
        });
        assert!(first.is_revealed());
        assert!(!second.is_revealed());
        assert!(second.is_observing());
    }
}
