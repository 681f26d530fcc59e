//! Fixed navigation bar with scroll-tracked highlighting.

use folio_core::content::{SocialKind, SocialLink};
use folio_core::{NavigationState, SectionRegistry, Site, ThrottleDecision, Viewport};
use leptos::ev;
use leptos::prelude::*;
use std::sync::Arc;
use std::time::Duration;

use crate::viewport::{now_ms, DomViewport};

const LOGO_SRC: &str = "/assets/logo.png";

#[component]
pub fn NavigationBar(site: Arc<Site>) -> impl IntoView {
    let nav = RwSignal::new(site.navigation());
    let throttle = StoredValue::new(site.throttle());
    let pending = StoredValue::new(None::<TimeoutHandle>);

    let on_scroll = move |_| match throttle.try_update_value(|t| t.poll(now_ms())) {
        Some(ThrottleDecision::Run) => recompute(nav),
        Some(ThrottleDecision::Defer(delay)) => {
            let handle = set_timeout_with_handle(
                move || {
                    pending.set_value(None);
                    recompute(nav);
                    throttle.update_value(|t| t.finish_deferred(now_ms()));
                },
                Duration::from_millis(delay.ceil() as u64),
            );
            match handle {
                Ok(handle) => pending.set_value(Some(handle)),
                Err(_) => {
                    tracing::warn!("could not schedule trailing scroll update");
                    throttle.update_value(|t| t.finish_deferred(now_ms()));
                }
            }
        }
        Some(ThrottleDecision::Skip) | None => {}
    };

    let listener = window_event_listener(ev::scroll, on_scroll);
    on_cleanup(move || {
        listener.remove();
        if let Some(handle) = pending.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    });

    let registry = site.registry();
    let menu_registry = site.registry();
    let socials = site.config().socials.clone();
    let mobile_socials = socials.clone();
    let brand = site
        .config()
        .profile
        .name
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_uppercase();
    let menu_open = move || nav.with(|n| n.menu_open());

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <div class="navbar-row">
                    <img
                        class="logo desktop-only"
                        src=LOGO_SRC
                        alt="Logo"
                        on:click=move |_| navigate(nav, "home")
                    />

                    <div class="nav-links desktop-only">
                        <NavLinks registry=registry nav=nav mobile=false/>
                    </div>

                    <div class="mobile-controls mobile-only">
                        <button
                            class="menu-toggle"
                            aria-label="Toggle menu"
                            aria-expanded=move || menu_open().to_string()
                            on:click=move |_| nav.update(|n| n.toggle_menu())
                        >
                            {move || if menu_open() { close_icon().into_any() } else { menu_icon().into_any() }}
                        </button>
                        <div class="divider"></div>
                        <img
                            class="logo logo-small"
                            src=LOGO_SRC
                            alt="Logo"
                            on:click=move |_| navigate(nav, "home")
                        />
                    </div>

                    <div class="brand mobile-only">{brand}</div>

                    <div class="socials desktop-only">
                        <div class="divider tall"></div>
                        {socials.into_iter().map(|link| view! { <SocialIcon link=link/> }).collect_view()}
                    </div>
                    <div class="socials mobile-only">
                        {mobile_socials.into_iter().map(|link| view! { <SocialIcon link=link/> }).collect_view()}
                    </div>
                </div>

                <Show when=menu_open>
                    <div class="mobile-menu mobile-only">
                        <NavLinks registry=menu_registry.clone() nav=nav mobile=true/>
                    </div>
                </Show>
            </div>
        </nav>
    }
}

/// One button per registered section.
#[component]
fn NavLinks(registry: Arc<SectionRegistry>, nav: RwSignal<NavigationState>, mobile: bool) -> impl IntoView {
    registry
        .iter()
        .map(|section| {
            let id = section.id.clone();
            let target = section.id.clone();
            view! {
                <button
                    class="nav-link"
                    class:mobile=mobile
                    class:active=move || nav.with(|n| n.is_active(&id))
                    on:click=move |_| navigate(nav, &target)
                >
                    {section.label.clone()}
                </button>
            }
        })
        .collect_view()
}

/// Re-run the tracker against the current scroll position.
fn recompute(nav: RwSignal<NavigationState>) {
    let Some(viewport) = DomViewport::new() else {
        return;
    };
    let scroll_y = viewport.scroll_y();
    nav.maybe_update(|n| n.on_scroll(scroll_y, &viewport));
}

fn navigate(nav: RwSignal<NavigationState>, id: &str) {
    let Some(viewport) = DomViewport::new() else {
        return;
    };
    nav.maybe_update(|n| n.navigate_to(id, &viewport));
}

#[component]
fn SocialIcon(link: SocialLink) -> impl IntoView {
    let label = link.kind.to_string();
    let paths = match link.kind {
        SocialKind::Instagram => view! {
            <path d="M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z" stroke="currentColor" stroke-linecap="round" stroke-linejoin="round" stroke-width="2"/>
            <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" stroke="currentColor" stroke-linecap="round" stroke-linejoin="round" stroke-width="2"/>
            <path d="M17.5 6.5H17.51" stroke="currentColor" stroke-linecap="round" stroke-linejoin="round" stroke-width="2"/>
        }
        .into_any(),
        SocialKind::X => view! {
            <path d="M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835zm-1.161 17.52h1.833L7.084 4.126H5.117z" fill="currentColor"/>
        }
        .into_any(),
        SocialKind::Facebook => view! {
            <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" stroke="currentColor" stroke-linecap="round" stroke-linejoin="round" stroke-width="2" fill="none"/>
        }
        .into_any(),
        SocialKind::Github => view! {
            <path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22" stroke="currentColor" stroke-linecap="round" stroke-linejoin="round" stroke-width="2" fill="none"/>
        }
        .into_any(),
    };

    view! {
        <a class="social-icon" href=link.url target="_blank" rel="noopener noreferrer" aria-label=label>
            <svg viewBox="0 0 24 24" fill="none">{paths}</svg>
        </a>
    }
}

fn menu_icon() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M4 6h16"/>
            <path d="M4 12h16"/>
            <path d="M4 18h16"/>
        </svg>
    }
}

fn close_icon() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M18 6 6 18"/>
            <path d="m6 6 12 12"/>
        </svg>
    }
}
