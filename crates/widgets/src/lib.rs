//! Built-in content widgets
//!
//! This crate contains the widget implementations a storefront page is
//! assembled from: banners, the rich-text banner editor, slideshows, the
//! product picker, and footer links.

mod banner_editor;
mod footer_links;
mod normal_banner;
mod products;
mod slideshow;

pub use banner_editor::{register_elements, BannerEditorWidget};
pub use footer_links::FooterLinksWidget;
pub use normal_banner::NormalBannerWidget;
pub use products::{ProductsWidget, MAX_PRODUCTS};
pub use slideshow::SlideShowWidget;

use storefront_core::Registry;

/// Register all built-in widgets and editor elements with a registry
pub fn register_all(registry: &mut Registry) {
    registry.register_widget(|| Box::new(NormalBannerWidget::new()));
    registry.register_widget(|| Box::new(BannerEditorWidget::new()));
    registry.register_widget(|| Box::new(SlideShowWidget::new()));
    registry.register_widget(|| Box::new(ProductsWidget::new()));
    registry.register_widget(|| Box::new(FooterLinksWidget::new()));

    register_elements(registry);
}
