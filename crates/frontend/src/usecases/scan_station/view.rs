use contracts::system::roles::{Role, Station};
use contracts::workflow::{resolve_action, ScanOutcome, ScanSession, ScannedCode};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::scanner::QrScanner;
use crate::api::agents;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::shared::query_cache::{use_query_cache, Q_BATCH, Q_BATCHES, Q_ORDER, Q_ORDERS};
use crate::system::auth::{use_auth, use_role};

const HISTORY_LEN: usize = 10;

/// Heading line and the effects of a scan at this station.
fn instructions(station: Station) -> (&'static str, &'static [&'static str]) {
    match station {
        Station::Printer => (
            "Scan the batch QR code after printing all items",
            &["This will mark the batch as PRINTED"],
        ),
        Station::Cutter => (
            "Scan the batch QR code after cutting all items",
            &["This will mark the batch as CUT"],
        ),
        Station::Fulfillment => (
            "Scan each item QR code when packing into box",
            &[
                "Each scan marks item as PACKED",
                "All items packed → Order = COMPLETED",
            ],
        ),
    }
}

fn page_id(station: Station) -> &'static str {
    match station {
        Station::Printer => "u501_scan_printer--usecase",
        Station::Cutter => "u502_scan_cutter--usecase",
        Station::Fulfillment => "u503_scan_fulfillment--usecase",
    }
}

fn viewport_id(station: Station) -> &'static str {
    match station {
        Station::Printer => "qr-reader-printer",
        Station::Cutter => "qr-reader-cutter",
        Station::Fulfillment => "qr-reader-fulfillment",
    }
}

/// Parses, checks against the station, and calls the scan endpoint.
async fn process_scan(role: Role, station: Station, raw: String) -> ScanOutcome {
    let action = match ScannedCode::parse(&raw).and_then(|code| resolve_action(&role, station, &code)) {
        Ok(action) => action,
        Err(e) => return ScanOutcome::Failure(e.to_string()),
    };
    match agents::scan(&action).await {
        Ok(result) => ScanOutcome::Success(result.summary()),
        Err(e) => ScanOutcome::Failure(e.to_string()),
    }
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[component]
pub fn ScanStationPage(station: Station) -> impl IntoView {
    let cache = use_query_cache();
    let role = use_role();
    let (auth_state, _) = use_auth();

    let session = StoredValue::new(ScanSession::default());
    let processing = RwSignal::new(false);
    let last_outcome = RwSignal::new(None::<ScanOutcome>);
    let history = RwSignal::new(Vec::<(String, ScanOutcome)>::new());
    let camera_error = RwSignal::new(None::<String>);
    let manual_token = RwSignal::new(String::new());

    let submit = Callback::new(move |raw: String| {
        let now = now_ms();
        if !session.try_update_value(|s| s.accept(&raw, now)).unwrap_or(false) {
            return;
        }
        log::info!("Scanned QR: {}", raw);
        processing.set(true);
        let current_role = role.get_untracked();
        spawn_local(async move {
            let outcome = process_scan(current_role, station, raw.clone()).await;
            if matches!(outcome, ScanOutcome::Success(_)) {
                cache.invalidate_many(&[Q_BATCHES, Q_BATCH, Q_ORDERS, Q_ORDER]);
            }
            session.update_value(|s| s.finish(outcome.clone(), now_ms()));
            history.update(|h| {
                h.insert(0, (raw, outcome.clone()));
                h.truncate(HISTORY_LEN);
            });
            last_outcome.set(Some(outcome));
            processing.set(false);
        });
    });

    let submit_manual = move |_| {
        let token = manual_token.get_untracked();
        if token.trim().is_empty() {
            return;
        }
        submit.run(token);
        manual_token.set(String::new());
    };

    let (heading, effects) = instructions(station);

    view! {
        <PageFrame page_id=page_id(station) category=PAGE_CAT_USECASE>
            <div class="station">
                <div class="station__instructions">
                    <h1 class="page__title">{station.title()}</h1>
                    <p>{heading}</p>
                    <ul class="station__effects">
                        {effects.iter().map(|e| view! { <li>{*e}</li> }).collect_view()}
                    </ul>
                </div>

                <div class="card station__scanner">
                    <h2 class="details-section__title">"Scan QR Code"</h2>
                    <p class="station__user">
                        {move || auth_state.with(|s| {
                            s.user
                                .as_ref()
                                .map(|u| format!("Logged in as: {} ({})", u.name, u.role))
                                .unwrap_or_default()
                        })}
                    </p>
                    {move || camera_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                    <QrScanner element_id=viewport_id(station) on_decode=submit camera_error=camera_error />
                    <p class="station__state">
                        {move || if processing.get() { "Processing..." } else { "Point camera at QR code" }}
                    </p>
                    {move || last_outcome.get().map(|outcome| match outcome {
                        ScanOutcome::Success(msg) => view! { <div class="alert alert--success">{msg}</div> }.into_any(),
                        ScanOutcome::Failure(msg) => view! { <div class="alert alert--error">{msg}</div> }.into_any(),
                    })}
                    <div class="form-row">
                        <Input value=manual_token placeholder="Or paste a code / token" />
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || processing.get())
                            on_click=submit_manual
                        >
                            "Submit"
                        </Button>
                    </div>
                </div>

                <Show when=move || history.with(|h| !h.is_empty())>
                    <div class="card station__history">
                        <h3 class="details-section__title">"Recent scans"</h3>
                        <ul>
                            {move || history.get().into_iter().map(|(raw, outcome)| {
                                let (class, text) = match outcome {
                                    ScanOutcome::Success(msg) => ("scan-log scan-log--ok", msg),
                                    ScanOutcome::Failure(msg) => ("scan-log scan-log--failed", msg),
                                };
                                view! {
                                    <li class=class>
                                        <code>{raw}</code>
                                        " "
                                        {text}
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructions_per_station() {
        assert!(instructions(Station::Printer).1[0].contains("PRINTED"));
        assert!(instructions(Station::Cutter).1[0].contains("CUT"));
        assert_eq!(instructions(Station::Fulfillment).1.len(), 2);
    }

    #[test]
    fn test_viewport_ids_are_distinct() {
        let ids: std::collections::HashSet<_> = Station::ALL.iter().map(|s| viewport_id(*s)).collect();
        assert_eq!(ids.len(), Station::ALL.len());
    }
}
