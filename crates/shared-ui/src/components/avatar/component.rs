use dioxus::prelude::*;

/// Circular user avatar container.
#[component]
pub fn Avatar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "avatar", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// Avatar image, shown when the user has an uploaded picture.
#[component]
pub fn AvatarImage(src: String) -> Element {
    rsx! {
        img { class: "avatar-image", src, alt: "" }
    }
}

/// Fallback initials shown when no image is available.
#[component]
pub fn AvatarFallback(children: Element) -> Element {
    rsx! {
        span { class: "avatar-fallback", {children} }
    }
}
