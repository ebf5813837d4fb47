//! Product catalog, product detail, search, categories and brands.

use storefront_locator::{primary_click, xpath_literal, InteractionPolicy, Locator};
use storefront_session::{Session, SessionError};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ProductsLocators {
    pub catalog_title: Locator,
    pub product_tiles: Locator,
    pub result_names: Locator,
    pub view_first_product: Locator,
    pub search_input: Locator,
    pub search_button: Locator,
    pub detail_name: Locator,
    pub detail_category: Locator,
    pub detail_price: Locator,
    pub detail_availability: Locator,
    pub detail_condition: Locator,
    pub detail_brand: Locator,
    pub quantity_input: Locator,
    pub add_to_cart_detail: Locator,
    pub modal_title: Locator,
    pub continue_shopping: Locator,
    pub view_cart_link: Locator,
    pub review_name: Locator,
    pub review_email: Locator,
    pub review_text: Locator,
    pub review_submit: Locator,
    pub review_success: Locator,
    pub category_sidebar: Locator,
    pub category_women: Locator,
    pub category_women_dress: Locator,
    pub brands_section: Locator,
    pub brand_polo: Locator,
}

impl Default for ProductsLocators {
    fn default() -> Self {
        Self {
            catalog_title: Locator::css(".features_items > .title"),
            product_tiles: Locator::css(".features_items .single-products"),
            result_names: Locator::css(".features_items .single-products .productinfo p"),
            view_first_product: Locator::text("a", "View Product"),
            search_input: Locator::css("#search_product"),
            search_button: Locator::css("#submit_search"),
            detail_name: Locator::css(".product-information h2"),
            detail_category: Locator::text("p", "Category:"),
            detail_price: Locator::css(".product-information span span"),
            detail_availability: Locator::text("b", "Availability:"),
            detail_condition: Locator::text("b", "Condition:"),
            detail_brand: Locator::text("b", "Brand:"),
            quantity_input: Locator::css("#quantity"),
            add_to_cart_detail: Locator::css("button.cart"),
            modal_title: Locator::css("#cartModal .modal-title"),
            continue_shopping: Locator::xpath(
                "//div[@id='cartModal']//button[contains(normalize-space(.), 'Continue Shopping')]",
            ),
            view_cart_link: Locator::xpath(
                "//div[@id='cartModal']//a[contains(normalize-space(.), 'View Cart')]",
            ),
            review_name: Locator::css("#name"),
            review_email: Locator::css("#email"),
            review_text: Locator::css("#review"),
            review_submit: Locator::css("#button-review"),
            review_success: Locator::css(".alert-success span"),
            category_sidebar: Locator::css(".category-products"),
            category_women: Locator::css("a[href='#Women']"),
            category_women_dress: Locator::css("a[href='/category_products/1']"),
            brands_section: Locator::css(".brands_products"),
            brand_polo: Locator::css("a[href='/brand_products/Polo']"),
        }
    }
}

/// Visibility snapshot of the product-detail information block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductDetailSections {
    pub name: bool,
    pub category: bool,
    pub price: bool,
    pub availability: bool,
    pub condition: bool,
    pub brand: bool,
}

impl ProductDetailSections {
    pub fn all_visible(&self) -> bool {
        self.name && self.category && self.price && self.availability && self.condition && self.brand
    }
}

/// Catalog and product-detail interactions. The same abstraction covers
/// `/products`, search results, category shelves and the detail page, since
/// the site renders them all through the same markup.
pub struct ProductsPage<'s> {
    session: &'s Session,
    loc: ProductsLocators,
    policy: InteractionPolicy,
}

impl<'s> ProductsPage<'s> {
    pub fn new(session: &'s Session) -> Self {
        Self {
            session,
            loc: ProductsLocators::default(),
            policy: InteractionPolicy::default(),
        }
    }

    /// Shelf title: "All Products", "Searched Products",
    /// "Women - Dress Products", "Brand - Polo Products".
    pub async fn catalog_title(&self) -> Result<String, SessionError> {
        self.session.text(&self.loc.catalog_title.selector()).await
    }

    pub async fn open_first_product(&self) -> Result<(), SessionError> {
        primary_click(self.session, &self.loc.view_first_product, &self.policy).await
    }

    pub async fn product_name(&self) -> Result<String, SessionError> {
        self.session.text(&self.loc.detail_name.selector()).await
    }

    pub async fn detail_sections(&self) -> Result<ProductDetailSections, SessionError> {
        Ok(ProductDetailSections {
            name: self.session.is_visible(&self.loc.detail_name.selector()).await?,
            category: self
                .session
                .is_visible(&self.loc.detail_category.selector())
                .await?,
            price: self
                .session
                .is_visible(&self.loc.detail_price.selector())
                .await?,
            availability: self
                .session
                .is_visible(&self.loc.detail_availability.selector())
                .await?,
            condition: self
                .session
                .is_visible(&self.loc.detail_condition.selector())
                .await?,
            brand: self
                .session
                .is_visible(&self.loc.detail_brand.selector())
                .await?,
        })
    }

    /// Search the catalog and wait for the results shelf to render.
    pub async fn search(&self, term: &str) -> Result<(), SessionError> {
        self.session
            .fill(&self.loc.search_input.selector(), term)
            .await?;
        primary_click(self.session, &self.loc.search_button, &self.policy).await?;
        self.session
            .wait_visible(&self.loc.catalog_title.selector())
            .await
    }

    pub async fn result_names(&self) -> Result<Vec<String>, SessionError> {
        self.session.texts(&self.loc.result_names.selector()).await
    }

    pub async fn result_count(&self) -> Result<usize, SessionError> {
        self.session.count(&self.loc.product_tiles.selector()).await
    }

    /// Add the grid product at `index` (zero-based) to the cart.
    ///
    /// The add affordance only renders on hover, and the confirmation
    /// modal must be visible before either branch control exists:
    /// hover tile, click the revealed control, wait for the modal. Callers
    /// then branch through [`Self::continue_shopping`] or
    /// [`Self::view_cart_from_modal`].
    pub async fn add_to_cart_by_index(&self, index: usize) -> Result<(), SessionError> {
        let tile = Locator::xpath(format!(
            "(//div[contains(@class,'features_items')]//div[contains(@class,'single-products')])[{}]",
            index + 1
        ));
        let add_link = Locator::xpath(format!(
            "(//div[contains(@class,'features_items')]//div[contains(@class,'single-products')])[{}]//a[contains(@class,'add-to-cart')]",
            index + 1
        ));
        debug!(index, "adding grid product to cart");
        self.session.hover(&tile.selector()).await?;
        primary_click(self.session, &add_link, &self.policy).await?;
        self.wait_added_modal().await
    }

    /// "Added!" modal title text.
    pub async fn added_modal_title(&self) -> Result<String, SessionError> {
        self.session.text(&self.loc.modal_title.selector()).await
    }

    pub async fn continue_shopping(&self) -> Result<(), SessionError> {
        primary_click(self.session, &self.loc.continue_shopping, &self.policy).await
    }

    pub async fn view_cart_from_modal(&self) -> Result<(), SessionError> {
        primary_click(self.session, &self.loc.view_cart_link, &self.policy).await
    }

    /// Overwrite the quantity field on the detail page.
    pub async fn set_quantity(&self, quantity: u32) -> Result<(), SessionError> {
        self.session
            .fill(&self.loc.quantity_input.selector(), &quantity.to_string())
            .await
    }

    /// Add from the detail page; waits for the confirmation modal.
    pub async fn add_to_cart_from_detail(&self) -> Result<(), SessionError> {
        primary_click(self.session, &self.loc.add_to_cart_detail, &self.policy).await?;
        self.wait_added_modal().await
    }

    pub async fn submit_review(
        &self,
        name: &str,
        email: &str,
        review: &str,
    ) -> Result<(), SessionError> {
        self.session.fill(&self.loc.review_name.selector(), name).await?;
        self.session
            .fill(&self.loc.review_email.selector(), email)
            .await?;
        self.session
            .fill(&self.loc.review_text.selector(), review)
            .await?;
        primary_click(self.session, &self.loc.review_submit, &self.policy).await
    }

    pub async fn review_success(&self) -> Result<String, SessionError> {
        self.session.text(&self.loc.review_success.selector()).await
    }

    pub async fn category_sidebar_visible(&self) -> Result<bool, SessionError> {
        self.session
            .is_visible(&self.loc.category_sidebar.selector())
            .await
    }

    /// Expand the Women category and open its Dress shelf.
    pub async fn open_women_dress_category(&self) -> Result<(), SessionError> {
        primary_click(self.session, &self.loc.category_women, &self.policy).await?;
        primary_click(self.session, &self.loc.category_women_dress, &self.policy).await
    }

    pub async fn brands_section_visible(&self) -> Result<bool, SessionError> {
        self.session
            .is_visible(&self.loc.brands_section.selector())
            .await
    }

    pub async fn open_polo_brand(&self) -> Result<(), SessionError> {
        primary_click(self.session, &self.loc.brand_polo, &self.policy).await
    }

    async fn wait_added_modal(&self) -> Result<(), SessionError> {
        self.session
            .wait_visible(&self.loc.modal_title.selector())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_sections_require_every_block() {
        let mut sections = ProductDetailSections {
            name: true,
            category: true,
            price: true,
            availability: true,
            condition: true,
            brand: true,
        };
        assert!(sections.all_visible());
        sections.brand = false;
        assert!(!sections.all_visible());
    }

    #[test]
    fn modal_branch_locators_are_scoped_to_the_modal() {
        let loc = ProductsLocators::default();
        assert!(loc.continue_shopping.selector().raw().contains("cartModal"));
        assert!(loc.view_cart_link.selector().raw().contains("cartModal"));
    }

    #[test]
    fn xpath_literal_is_reexported_for_row_building() {
        assert_eq!(xpath_literal("Blue Top"), "'Blue Top'");
    }
}
