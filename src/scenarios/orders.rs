//! Checkout and payment journeys.

use storefront_pages::{
    address_without_header, CartPage, CheckoutPage, HomePage, LoginPage, PaymentPage,
    ProductsPage,
};
use storefront_session::Session;
use storefront_synthetic::{synthetic_card, SyntheticUser};

use crate::bootstrap;
use crate::errors::{ensure, ensure_contains, ensure_eq, ScenarioError};
use crate::settings::Settings;

/// Fill a synthetic card, confirm the order, and wait for the
/// confirmation line.
async fn pay_and_confirm(
    session: &Session,
    user: &SyntheticUser,
    settings: &Settings,
) -> Result<(), ScenarioError> {
    let payment = PaymentPage::new(session);
    payment.fill_card(&synthetic_card(&user.name)).await?;
    payment.pay_and_confirm().await?;

    let confirmation = PaymentPage::new(session)
        .order_success_within(settings.confirmation_timeout())
        .await?;
    ensure(
        !confirmation.trim().is_empty(),
        "order confirmation",
        "expected a confirmation line after payment",
    )
}

/// Start checkout as a guest, register through the checkout modal, then
/// pay and delete the account.
pub async fn register_while_checkout(
    session: &Session,
    settings: &Settings,
) -> Result<(), ScenarioError> {
    let home = HomePage::new(session);
    home.open().await?;

    let products = ProductsPage::new(session);
    products.add_to_cart_by_index(0).await?;
    products.continue_shopping().await?;
    home.click_cart().await?;

    let cart = CartPage::new(session);
    cart.proceed_to_checkout().await?;
    cart.click_register_login().await?;

    let user = bootstrap::signup_from_login_page(session, settings).await?;

    HomePage::new(session).click_cart().await?;
    CartPage::new(session).proceed_to_checkout().await?;

    let checkout = CheckoutPage::new(session);
    let delivery = checkout.delivery_address().await?;
    ensure_contains(&delivery, &user.first_name, "delivery address name")?;
    ensure_contains(&delivery, &user.address1, "delivery address line")?;

    checkout.enter_comment("Placing a test order.").await?;
    checkout.place_order().await?;
    pay_and_confirm(session, &user, settings).await?;

    bootstrap::delete_account(session, settings).await
}

/// Register first, then order and pay.
pub async fn register_before_checkout(
    session: &Session,
    settings: &Settings,
) -> Result<(), ScenarioError> {
    let user = bootstrap::register_user(session, settings).await?;

    HomePage::new(session).click_products().await?;
    let products = ProductsPage::new(session);
    products.add_to_cart_by_index(0).await?;
    products.continue_shopping().await?;
    HomePage::new(session).click_cart().await?;
    CartPage::new(session).proceed_to_checkout().await?;

    let checkout = CheckoutPage::new(session);
    ensure_contains(
        &checkout.delivery_address().await?,
        &user.first_name,
        "delivery address name",
    )?;
    checkout.place_order().await?;
    pay_and_confirm(session, &user, settings).await?;

    bootstrap::delete_account(session, settings).await
}

/// Register, log out, log back in, then order and pay.
pub async fn login_before_checkout(
    session: &Session,
    settings: &Settings,
) -> Result<(), ScenarioError> {
    let user = bootstrap::register_user(session, settings).await?;
    HomePage::new(session).logout().await?;

    HomePage::new(session).click_signup_login().await?;
    LoginPage::new(session)
        .login(&user.email, &user.password)
        .await?;

    HomePage::new(session).click_products().await?;
    let products = ProductsPage::new(session);
    products.add_to_cart_by_index(1).await?;
    products.continue_shopping().await?;
    HomePage::new(session).click_cart().await?;
    CartPage::new(session).proceed_to_checkout().await?;

    let checkout = CheckoutPage::new(session);
    ensure_contains(
        &checkout.delivery_address().await?,
        &user.first_name,
        "delivery address name",
    )?;
    checkout.place_order().await?;
    pay_and_confirm(session, &user, settings).await?;

    bootstrap::delete_account(session, settings).await
}

/// The checkout address blocks echo the signup record exactly, and the
/// billing block equals the delivery block once headers are stripped.
pub async fn checkout_address_match(
    session: &Session,
    settings: &Settings,
) -> Result<(), ScenarioError> {
    let user = bootstrap::register_user(session, settings).await?;

    let products = ProductsPage::new(session);
    products.add_to_cart_by_index(0).await?;
    products.view_cart_from_modal().await?;
    CartPage::new(session).proceed_to_checkout().await?;

    let checkout = CheckoutPage::new(session);
    let delivery = checkout.delivery_address().await?;
    let billing = checkout.billing_address().await?;

    ensure_contains(&delivery, &user.addressee(), "addressee line")?;
    ensure_contains(&delivery, &user.company, "company line")?;
    ensure_contains(&delivery, &user.address1, "address line 1")?;
    ensure_contains(&delivery, &user.address2, "address line 2")?;
    ensure_contains(&delivery, &user.city_state_zip(), "city/state/zip line")?;
    ensure_contains(&delivery, &user.country, "country line")?;
    ensure_contains(&delivery, &user.mobile_number, "mobile number line")?;

    ensure_eq(
        &address_without_header(&billing),
        &address_without_header(&delivery),
        "billing equals delivery",
    )
}

/// After a purchase, the invoice downloads into the session's staging
/// directory as a non-empty file.
pub async fn invoice_download(session: &Session, settings: &Settings) -> Result<(), ScenarioError> {
    let user = bootstrap::register_user(session, settings).await?;

    let products = ProductsPage::new(session);
    products.add_to_cart_by_index(0).await?;
    products.view_cart_from_modal().await?;
    CartPage::new(session).proceed_to_checkout().await?;
    CheckoutPage::new(session).place_order().await?;

    let payment = PaymentPage::new(session);
    payment.fill_card(&synthetic_card(&user.name)).await?;
    payment.pay_and_confirm().await?;

    let confirmation = PaymentPage::new(session);
    confirmation
        .order_success_within(settings.confirmation_timeout())
        .await?;
    let invoice = confirmation
        .download_invoice(settings.download_timeout())
        .await?;

    let metadata = std::fs::metadata(&invoice)
        .map_err(|err| ScenarioError::Setup(format!("invoice file: {err}")))?;
    ensure(metadata.len() > 0, "invoice file", "downloaded invoice is empty")?;

    bootstrap::delete_account(session, settings).await
}
