// Integration tests for the types crate

#[cfg(test)]
mod tests {
    use crate::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_input_matches_form_defaults() {
        let input = ScenarioInput::default();
        assert_eq!(input.ad_spend, 10_000.0);
        assert_eq!(input.click_through_rate, 2.5);
        assert_eq!(input.conversion_rate, 3.0);
        assert_eq!(input.average_order_value, 75.0);
        assert_eq!(input.target_cac, 50.0);
        assert_eq!(input.brand_awareness, 30);
        assert_eq!(input.email_open_rate, 22);
        assert_eq!(input.social_engagement_rate, 5.0);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_roundtrip_serialization() {
        let pair = ScenarioPair::new(
            ScenarioInput::default(),
            ScenarioInput {
                ad_spend: 20_000.0,
                ..ScenarioInput::default()
            },
        );

        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: ScenarioPair<ScenarioInput> = serde_json::from_str(&json).unwrap();

        assert_eq!(pair, deserialized);
    }

    #[test]
    fn test_partial_input_rejected() {
        let json = r#"{"ad_spend": 100.0, "click_through_rate": 2.0}"#;
        let parsed: std::result::Result<ScenarioInput, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_validate_rejects_dead_field_out_of_range() {
        // target_cac feeds no metric but the form still bounds it
        let input = ScenarioInput {
            target_cac: 501.0,
            ..ScenarioInput::default()
        };
        match input.validate() {
            Err(AdSimError::OutOfRange { field, .. }) => assert_eq!(field, "target_cac"),
            other => panic!("expected OutOfRange, got {:?}", other),
        }

        let input = ScenarioInput {
            email_open_rate: 101,
            ..ScenarioInput::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let input = ScenarioInput {
            ad_spend: f64::NAN,
            ..ScenarioInput::default()
        };
        assert!(matches!(
            input.validate(),
            Err(AdSimError::NonFinite { field: "ad_spend" })
        ));
    }

    #[test]
    fn test_set_and_value_agree() {
        let mut input = ScenarioInput::default();
        input.set(InputField::BrandAwareness, 55.0).unwrap();
        input.set(InputField::ClickThroughRate, 4.2).unwrap();

        assert_eq!(input.brand_awareness, 55);
        assert_eq!(input.value(InputField::BrandAwareness), 55.0);
        assert_eq!(input.value(InputField::ClickThroughRate), 4.2);
    }

    #[test]
    fn test_set_out_of_range_leaves_input_untouched() {
        let mut input = ScenarioInput::default();
        assert!(input.set(InputField::ConversionRate, 25.0).is_err());
        assert_eq!(input.conversion_rate, 3.0);
    }

    #[test]
    fn test_pair_accessors() {
        let pair = ScenarioPair::new(1, 2);

        let doubled = pair.map(|v| v * 2);
        assert_eq!(doubled, ScenarioPair::new(2, 4));

        let labelled: Vec<(ScenarioId, i32)> = pair.iter().map(|(id, v)| (id, *v)).collect();
        assert_eq!(labelled, vec![(ScenarioId::A, 1), (ScenarioId::B, 2)]);
    }

    #[test]
    fn test_winner_swapped() {
        assert_eq!(Winner::ScenarioA.swapped(), Winner::ScenarioB);
        assert_eq!(Winner::Tie.swapped(), Winner::Tie);
        assert_eq!(Winner::ScenarioB.label(), "Scenario B");
    }

    proptest! {
        #[test]
        fn prop_in_range_spend_accepted(spend in 0.0f64..=1_000_000.0) {
            let input = ScenarioInput::default().with(InputField::AdSpend, spend).unwrap();
            prop_assert!(input.validate().is_ok());
            prop_assert_eq!(input.ad_spend, spend);
        }

        #[test]
        fn prop_whole_percent_accepted(awareness in 0u8..=100) {
            let input = ScenarioInput {
                brand_awareness: awareness,
                ..ScenarioInput::default()
            };
            prop_assert!(input.validate().is_ok());
        }

        #[test]
        fn prop_rate_above_twenty_rejected(rate in 20.0001f64..1_000.0) {
            let mut input = ScenarioInput::default();
            prop_assert!(input.set(InputField::SocialEngagementRate, rate).is_err());
        }
    }
}
