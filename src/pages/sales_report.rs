//! Sales report: the caller's role-filtered sales with a running total.

#[cfg(test)]
#[path = "sales_report_test.rs"]
mod sales_report_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::loading::LoadingSpinner;
use crate::net::api;
use crate::net::types::Sale;
use crate::state::provider::SessionContext;
use crate::state::remote::{Remote, spawn_load};
use crate::util::format::{display_date, or_na, rupees};

/// Sum of all sale amounts; missing amounts count as zero.
pub fn sales_total(sales: &[Sale]) -> f64 {
    sales.iter().filter_map(|s| s.amount).fold(0.0, |total, amount| total + amount)
}

#[component]
pub fn SalesReportPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let sales = RwSignal::new(Remote::<Vec<Sale>>::Loading);

    let client = session.client();
    spawn_load(sales, async move { api::list_sales(&client).await });

    move || match sales.get() {
        Remote::Loading => view! { <LoadingSpinner/> }.into_any(),
        Remote::Failed(message) => view! {
            <div class="page page--error">
                <h2>"Error Loading Sales Report"</h2>
                <p>{message}</p>
            </div>
        }
        .into_any(),
        Remote::Ready(rows) if rows.is_empty() => view! {
            <div class="page">
                <h1 class="page__title">"Sales Report"</h1>
                <p class="data-table__empty">"No sales records found."</p>
            </div>
        }
        .into_any(),
        Remote::Ready(rows) => {
            let total = rupees(sales_total(&rows));
            view! {
                <div class="page">
                    <h1 class="page__title">"Sales Report"</h1>
                    <section class="report-section">
                        <h2 class="page__section-title">"Your Sales"</h2>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Company Name"</th>
                                    <th>"Client Name"</th>
                                    <th>"Email ID"</th>
                                    <th>"Contact No."</th>
                                    <th>"Services"</th>
                                    <th>"Amount"</th>
                                    <th>"Date"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|sale| view! {
                                        <tr>
                                            <td>{sale.company_name}</td>
                                            <td>{sale.client_name}</td>
                                            <td>{or_na(sale.email_id.as_deref())}</td>
                                            <td>{or_na(sale.contact_no.as_deref())}</td>
                                            <td>{or_na(sale.services.as_deref())}</td>
                                            <td>{rupees(sale.amount.unwrap_or_default())}</td>
                                            <td>{display_date(sale.sale_date.as_deref())}</td>
                                        </tr>
                                    })
                                    .collect_view()}
                            </tbody>
                            <tfoot>
                                <tr>
                                    <td colspan="5">"Total"</td>
                                    <td>{total}</td>
                                    <td></td>
                                </tr>
                            </tfoot>
                        </table>
                    </section>
                </div>
            }
            .into_any()
        }
    }
}
