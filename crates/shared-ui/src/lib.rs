pub mod components;

pub use components::*;

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::prelude::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn badge_renders_variant_attribute() {
        fn app() -> Element {
            rsx! {
                Badge { variant: BadgeVariant::Secondary, "TRAINEE" }
            }
        }
        let html = render(app);
        assert!(html.contains("TRAINEE"));
        assert!(html.contains("data-style=\"secondary\""));
    }

    #[test]
    fn card_nests_header_and_content() {
        fn app() -> Element {
            rsx! {
                Card {
                    CardHeader { "Pending Reviews" }
                    CardContent { "57" }
                }
            }
        }
        let html = render(app);
        assert!(html.contains("card-header"));
        assert!(html.contains("Pending Reviews"));
        assert!(html.contains("57"));
    }

    #[test]
    fn skeleton_is_an_empty_placeholder() {
        fn app() -> Element {
            rsx! {
                Skeleton { width: "100%", height: "60px" }
            }
        }
        let html = render(app);
        assert!(html.contains("skeleton"));
    }
}
