//! Page abstractions for the storefront demo site.
//!
//! One type per logical page. Constructors wire locator declarations;
//! methods expose semantic actions and reads. Locators resolve at
//! interaction time, so a page object built before navigation is valid —
//! but after a full page load the scenario must construct a fresh instance
//! rather than reuse one from the previous document.

mod account;
mod cart;
mod checkout;
mod contact;
mod home;
mod login;
mod payment;
mod products;
mod signup;

pub use account::{AccountCreatedPage, AccountDeletedPage};
pub use cart::CartPage;
pub use checkout::{address_without_header, CheckoutPage};
pub use contact::ContactUsPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use payment::PaymentPage;
pub use products::{ProductDetailSections, ProductsPage};
pub use signup::SignupPage;
