use quote_calc::domain::model::{
    Component, CountRange, DurationBand, GraphicOrder, QualityTier, VideoOrder,
};
use quote_calc::{compute_quote, PricingTable, QuoteRequest, QuoteResult};

fn graphic_orders() -> Vec<GraphicOrder> {
    vec![
        GraphicOrder::default(),
        GraphicOrder {
            social_media: 10,
            ..GraphicOrder::default()
        },
        GraphicOrder {
            social_media: 12,
            banners: 4,
            brochures: 2,
            bilingual: true,
            ..GraphicOrder::default()
        },
        GraphicOrder {
            social_media: 30,
            banners: 7,
            brochures: 3,
            illustrations: 5,
            packaging: 2,
            bilingual: false,
        },
        GraphicOrder {
            illustrations: 9,
            packaging: 1,
            bilingual: true,
            ..GraphicOrder::default()
        },
    ]
}

fn video_orders() -> Vec<VideoOrder> {
    let mut with_add_ons = VideoOrder::tiered(6, 3, 1);
    with_add_ons.captions = true;
    with_add_ons.stock_footage = true;
    with_add_ons.scripting = true;

    let mut banded_with_captions = VideoOrder::banded(
        CountRange::new(5, 10).unwrap(),
        DurationBand::Medium,
        QualityTier::Premium,
    );
    banded_with_captions.captions = true;

    vec![
        VideoOrder::default(),
        VideoOrder::tiered(15, 0, 0),
        VideoOrder::tiered(2, 1, 0),
        with_add_ons,
        banded_with_captions,
        VideoOrder::banded(
            CountRange::new(21, 30).unwrap(),
            DurationBand::Long,
            QualityTier::Cinematic,
        ),
    ]
}

fn all_requests() -> Vec<QuoteRequest> {
    let mut requests = Vec::new();
    for graphic in graphic_orders() {
        requests.push(QuoteRequest::graphic(graphic));
    }
    for video in video_orders() {
        requests.push(QuoteRequest::video(video));
    }
    for graphic in graphic_orders() {
        for video in video_orders() {
            requests.push(QuoteRequest::both(graphic, video));
        }
    }
    requests
}

#[test]
fn test_breakdown_sums_to_monthly_price() {
    let pricing = PricingTable::default();
    for request in all_requests() {
        let result = compute_quote(&request, &pricing);
        assert_eq!(
            result.breakdown_total(),
            result.monthly_price,
            "breakdown mismatch for {:?}",
            request
        );
        assert!(result.estimated_hours >= 0.0);
    }
}

#[test]
fn test_price_never_below_category_floor() {
    let pricing = PricingTable::default();
    let bundle_floor = compute_quote(
        &QuoteRequest::both(GraphicOrder::default(), VideoOrder::default()),
        &pricing,
    )
    .monthly_price;

    for request in all_requests() {
        let result = compute_quote(&request, &pricing);
        let floor = match request.service_type.unwrap() {
            quote_calc::ServiceType::Graphic => 1200,
            quote_calc::ServiceType::Video => 1500,
            quote_calc::ServiceType::Both => bundle_floor,
        };
        assert!(result.monthly_price >= floor, "{:?}", request);
    }
}

#[test]
fn test_within_allotment_is_base_price() {
    let pricing = PricingTable::default();

    for social_media in 0..=20 {
        let plain = compute_quote(
            &QuoteRequest::graphic(GraphicOrder {
                social_media,
                ..GraphicOrder::default()
            }),
            &pricing,
        );
        assert_eq!(plain.monthly_price, 1200);

        let bilingual = compute_quote(
            &QuoteRequest::graphic(GraphicOrder {
                social_media,
                bilingual: true,
                ..GraphicOrder::default()
            }),
            &pricing,
        );
        assert_eq!(bilingual.monthly_price, 1380);
    }

    for basic in 0..=10 {
        let result = compute_quote(&QuoteRequest::video(VideoOrder::tiered(basic, 0, 0)), &pricing);
        assert_eq!(result.monthly_price, 1500);
    }
}

#[test]
fn test_graphic_price_is_monotonic_in_every_count() {
    let pricing = PricingTable::default();
    let setters: [fn(&mut GraphicOrder, u32); 5] = [
        |o, n| o.social_media = n,
        |o, n| o.banners = n,
        |o, n| o.brochures = n,
        |o, n| o.illustrations = n,
        |o, n| o.packaging = n,
    ];

    for base in graphic_orders() {
        for set in setters {
            let mut previous = None;
            for n in 0..40 {
                let mut order = base;
                set(&mut order, n);
                let price = compute_quote(&QuoteRequest::graphic(order), &pricing).monthly_price;
                if let Some(previous) = previous {
                    assert!(price >= previous, "price dropped at {} for {:?}", n, order);
                }
                previous = Some(price);
            }
        }
    }
}

#[test]
fn test_video_price_is_monotonic_in_every_count() {
    let pricing = PricingTable::default();

    for tier in 0..3 {
        for add_ons in [false, true] {
            let mut previous = None;
            for n in 0..40 {
                let counts = match tier {
                    0 => (n, 1, 1),
                    1 => (1, n, 1),
                    _ => (1, 1, n),
                };
                let mut order = VideoOrder::tiered(counts.0, counts.1, counts.2);
                order.captions = add_ons;
                order.scripting = add_ons;

                let both = QuoteRequest::both(
                    GraphicOrder {
                        social_media: 8,
                        ..GraphicOrder::default()
                    },
                    order,
                );
                let video_price = compute_quote(&QuoteRequest::video(order), &pricing).monthly_price;
                let both_price = compute_quote(&both, &pricing).monthly_price;

                if let Some((prev_video, prev_both)) = previous {
                    assert!(video_price >= prev_video);
                    assert!(both_price >= prev_both);
                }
                previous = Some((video_price, both_price));
            }
        }
    }
}

#[test]
fn test_bundle_is_cheaper_than_buying_separately() {
    for discount_rate in [0.10, 0.0001, 0.95] {
        let mut pricing = PricingTable::default();
        pricing.bundle.discount_rate = discount_rate;
        assert_bundle_saves(&pricing);
    }
}

fn assert_bundle_saves(pricing: &PricingTable) {
    for graphic in graphic_orders() {
        for video in video_orders() {
            let graphic_only = compute_quote(&QuoteRequest::graphic(graphic), pricing);
            let video_only = compute_quote(&QuoteRequest::video(video), pricing);
            let both = compute_quote(&QuoteRequest::both(graphic, video), pricing);

            assert!(
                both.monthly_price < graphic_only.monthly_price + video_only.monthly_price,
                "no bundle saving at rate {} for {:?} + {:?}",
                pricing.bundle.discount_rate,
                graphic,
                video
            );
            assert_eq!(
                both.estimated_hours,
                graphic_only.estimated_hours + video_only.estimated_hours
            );
        }
    }
}

#[test]
fn test_identical_input_gives_identical_output() {
    let pricing = PricingTable::default();
    for request in all_requests() {
        assert_eq!(compute_quote(&request, &pricing), compute_quote(&request, &pricing));
    }
}

#[test]
fn test_ten_social_designs() {
    let pricing = PricingTable::default();
    let request = QuoteRequest::graphic(GraphicOrder {
        social_media: 10,
        ..GraphicOrder::default()
    });

    let result = compute_quote(&request, &pricing);
    assert_eq!(result.monthly_price, 1200);
    assert_eq!(result.estimated_hours, 20.0);
    assert_eq!(
        result.includes,
        vec![
            "Dedicated graphic designer",
            "Up to 20 design hours per month",
            "Monthly deliverables: 10 social media designs",
        ]
    );
}

#[test]
fn test_ten_social_designs_bilingual() {
    let pricing = PricingTable::default();
    let request = QuoteRequest::graphic(GraphicOrder {
        social_media: 10,
        bilingual: true,
        ..GraphicOrder::default()
    });

    let result = compute_quote(&request, &pricing);
    assert_eq!(result.monthly_price, (1200.0_f64 * 1.15).round() as i64);
    assert_eq!(result.component_total(Component::BilingualSurcharge), 180);
    assert_eq!(result.includes.last().unwrap(), "Bilingual versions of all 10 designs");
}

#[test]
fn test_fifteen_basic_edits_go_over_allotment() {
    let pricing = PricingTable::default();
    let result = compute_quote(&QuoteRequest::video(VideoOrder::tiered(15, 0, 0)), &pricing);

    // 15 * 2h = 30h, 10h over at 75/h
    assert_eq!(result.monthly_price, 1500 + 10 * 75);
    assert_eq!(result.component_total(Component::VolumeAdjustment), 750);
    assert_eq!(result.estimated_hours, 30.0);
    assert!(result
        .includes
        .contains(&"10 additional editing hours for 30 requested hours of work".to_string()));
}

#[test]
fn test_no_category_selected() {
    let pricing = PricingTable::default();
    let mut request = QuoteRequest::both(
        GraphicOrder {
            social_media: 10,
            ..GraphicOrder::default()
        },
        VideoOrder::tiered(3, 0, 0),
    );
    request.service_type = None;

    let result = compute_quote(&request, &pricing);
    assert_eq!(result.monthly_price, 0);
    assert!(result.includes.is_empty());
    assert_eq!(result, QuoteResult::default());
}
