use leptos::{ev::MouseEvent, prelude::*, web_sys::HtmlElement};
use leptos_use::use_window_scroll;
use wasm_bindgen::JsCast;

use crate::content::PORTFOLIO;
use crate::nav::{ChatContact, NavLink, NavState, SectionId, NAV_LINKS};
use crate::scroll::{ScrollTracker, SectionSpan};

fn section_span(section: SectionId) -> Option<SectionSpan> {
    let el = document()
        .get_element_by_id(section.id())?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(SectionSpan::new(
        el.offset_top() as f64,
        el.offset_height() as f64,
    ))
}

// smooth behaviour comes from `scroll-smooth` on <html>
fn scroll_to(section: SectionId) {
    match document().get_element_by_id(section.id()) {
        Some(el) => el.scroll_into_view(),
        None => log::warn!("no element for section #{}", section.id()),
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (tracker, set_tracker) = signal(ScrollTracker::default());
    let nav = RwSignal::new(NavState::default());
    let (_, scroll_y) = use_window_scroll();

    // runs once on mount, then on every scroll
    Effect::new(move |_| {
        let y = scroll_y.get();
        set_tracker.maybe_update(|t| t.observe(y, section_span));
    });

    let follow = move |ev: MouseEvent, link: NavLink| {
        ev.prevent_default();
        if let Some(section) = nav.try_update(|n| n.select(&link)) {
            scroll_to(section);
        }
    };
    let is_active = move |link: NavLink| tracker.get().active() == link.section_id;

    view! {
        <nav class=move || {
            if tracker.get().scrolled() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-slate-950/80 backdrop-blur-xl shadow-lg shadow-black/20"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="w-full px-6">
                <div class="flex items-center justify-between h-20">
                    <a
                        href=SectionId::Home.anchor()
                        on:click=move |ev| follow(ev, NAV_LINKS[0])
                        class="flex items-center gap-2 flex-shrink-0"
                    >
                        <div class="relative p-2 bg-surface-variant rounded-lg border border-outline">
                            <span class="text-primary font-bold">"</>"</span>
                        </div>
                        <span class="text-xl font-bold text-white">"Portfolio"</span>
                    </a>

                    <div class="hidden md:flex items-center gap-1 absolute left-1/2 transform -translate-x-1/2">
                        {NAV_LINKS
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.target_anchor
                                        on:click=move |ev| follow(ev, link)
                                        class=move || {
                                            if is_active(link) {
                                                "relative px-4 py-2 text-sm font-medium rounded-lg text-primary bg-white/5 border border-white/10"
                                            } else {
                                                "relative px-4 py-2 text-sm font-medium rounded-lg text-slate-300 hover:text-white border border-transparent"
                                            }
                                        }
                                    >
                                        {link.display_name}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <button
                        on:click=move |_| nav.update(NavState::open_chat)
                        class="hidden md:flex items-center gap-2 px-5 py-2.5 bg-primary text-white text-sm font-semibold rounded-lg hover:bg-primary/90 transition-colors duration-200 shadow-lg shadow-primary/25 flex-shrink-0"
                    >
                        <span>"Let's Talk"</span>
                        <span>"→"</span>
                    </button>

                    <button
                        on:click=move |_| nav.update(NavState::toggle_menu)
                        class="md:hidden p-2 text-white text-2xl"
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || nav.get().menu.is_open().to_string()
                    >
                        {move || if nav.get().menu.is_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
        </nav>

        {move || {
            nav.get()
                .menu
                .is_open()
                .then(|| {
                    view! {
                        <div class="fixed inset-x-0 top-20 z-40 md:hidden menu-enter">
                            <div class="mx-4 p-4 bg-slate-950/95 backdrop-blur-xl border border-white/10 rounded-2xl shadow-2xl">
                                <div class="flex flex-col gap-2">
                                    {NAV_LINKS
                                        .into_iter()
                                        .map(|link| {
                                            view! {
                                                <a
                                                    href=link.target_anchor
                                                    on:click=move |ev| follow(ev, link)
                                                    class=move || {
                                                        if is_active(link) {
                                                            "px-4 py-3 rounded-lg text-base font-medium bg-primary/20 text-primary border border-primary/30"
                                                        } else {
                                                            "px-4 py-3 rounded-lg text-base font-medium text-slate-300 hover:bg-white/5 hover:text-white"
                                                        }
                                                    }
                                                >
                                                    {link.display_name}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                    <button
                                        on:click=move |_| nav.update(NavState::open_chat)
                                        class="mt-2 px-4 py-3 bg-primary text-white text-center font-semibold rounded-lg"
                                    >
                                        "Let's Talk"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}

        {move || nav.get().chat_open.then(|| view! { <ChatDialog nav /> })}
    }
}

#[component]
fn ChatDialog(nav: RwSignal<NavState>) -> impl IntoView {
    let chat = ChatContact::new(PORTFOLIO.profile.whatsapp.clone());
    let close = move |_: MouseEvent| nav.update(NavState::close_chat);

    view! {
        <div class="fixed inset-0 bg-black/60 backdrop-blur-sm z-50" on:click=close></div>
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4 pointer-events-none">
            <div
                role="dialog"
                aria-modal="true"
                class="relative bg-white/10 backdrop-blur-2xl border border-white/20 rounded-3xl p-8 max-w-sm w-full shadow-2xl pointer-events-auto dialog-enter"
            >
                <button
                    on:click=close
                    class="absolute top-4 right-4 p-2 text-slate-400 hover:text-white transition-colors duration-200"
                    aria-label="Close"
                >
                    "✕"
                </button>
                <div class="text-center">
                    <div class="inline-flex items-center justify-center w-16 h-16 bg-green-500/20 rounded-full mb-6">
                        <i class="devicon-whatsapp-plain text-3xl text-green-400"></i>
                    </div>
                    <h3 class="text-2xl font-bold text-white mb-2">"Chat on WhatsApp"</h3>
                    <p class="text-slate-400 text-sm mb-6">
                        "Scan the QR code or click the button below to start a conversation"
                    </p>
                    {chat
                        .qr_code_url()
                        .map(|src| {
                            view! {
                                <div class="bg-white p-4 rounded-2xl mb-6 inline-block">
                                    <img src=src alt="WhatsApp QR Code" class="w-48 h-48" />
                                </div>
                            }
                        })}
                    <div class="mb-6">
                        <p class="text-slate-400 text-sm mb-1">"WhatsApp Number"</p>
                        <p class="text-xl font-semibold text-white">{chat.number.clone()}</p>
                    </div>
                    <a
                        href=chat.chat_link()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 px-8 py-4 bg-gradient-to-r from-green-500 to-green-600 text-white font-semibold rounded-xl transition-all duration-200"
                    >
                        "Open WhatsApp"
                    </a>
                </div>
            </div>
        </div>
    }
}
