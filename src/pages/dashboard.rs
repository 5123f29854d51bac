//! Dashboard Page
//!
//! User totals derived from the partner list.

use leptos::prelude::*;

use super::{load_on_mount, session_api};
use crate::api::fetch_partners;
use crate::models::Partner;

/// `(total, husbands, wives)`
pub fn partner_totals(partners: &[Partner]) -> (usize, usize, usize) {
    let husbands = partners.iter().filter(|p| p.is_husband()).count();
    let wives = partners.iter().filter(|p| p.is_wife()).count();
    (partners.len(), husbands, wives)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (api, _) = session_api();
    let partners = load_on_mount("users", move || {
        let api = api.clone();
        async move { fetch_partners(&api).await }
    });

    let totals = move || match partners.get() {
        Some(Ok(list)) => {
            let (total, husbands, wives) = partner_totals(&list);
            (total.to_string(), husbands.to_string(), wives.to_string())
        }
        Some(Err(_)) => ("-".into(), "-".into(), "-".into()),
        None => ("...".into(), "...".into(), "...".into()),
    };

    view! {
        <section class="page">
            <div class="page-header">
                <h2>"Dashboard"</h2>
            </div>
            <div class="stat-cards">
                <div class="stat-card">
                    <span class="stat-label">"Total users"</span>
                    <span class="stat-value">{move || totals().0}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">"Total Male"</span>
                    <span class="stat-value">{move || totals().1}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">"Total Female"</span>
                    <span class="stat-value">{move || totals().2}</span>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partner(role: &str) -> Partner {
        Partner {
            partner: role.to_string(),
            ..Partner::default()
        }
    }

    #[test]
    fn test_partner_totals() {
        let list = vec![partner("Husband"), partner("wife"), partner("husband"), partner("")];
        assert_eq!(partner_totals(&list), (4, 2, 1));
    }

    #[test]
    fn test_partner_totals_empty() {
        assert_eq!(partner_totals(&[]), (0, 0, 0));
    }
}
