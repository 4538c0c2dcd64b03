//! Site footer with quick links and contact details.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::logo::Logo;

const QUICK_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/games", "Games"),
    ("/services", "Therapy Sessions"),
    ("/dashboard", "Dashboard"),
];

const RESOURCES: &[&str] = &["Blog", "Help & Support", "Privacy Policy", "Terms of Service"];

fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

fn copyright(year: i32) -> String {
    format!("© {year} SamVed. All rights reserved.")
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__about">
                    <div class="footer__brand">
                        <Logo size=32/>
                        <span>"SamVed"</span>
                    </div>
                    <p>
                        "Empowering autistic children through holistic development, personalized care, and engaging educational resources."
                    </p>
                    <p class="footer__made-with">"Made with ♥ for special children"</p>
                </div>
                <div>
                    <h3>"Quick Links"</h3>
                    <ul>
                        {QUICK_LINKS
                            .iter()
                            .map(|(href, label)| view! { <li><A href=*href>{*label}</A></li> })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h3>"Resources"</h3>
                    <ul>
                        {RESOURCES.iter().map(|label| view! { <li><a href="#">{*label}</a></li> }).collect_view()}
                    </ul>
                </div>
                <div>
                    <h3>"Contact Us"</h3>
                    <ul class="footer__contact">
                        <li>
                            "Geethanjali College of Engineering and Technology, Cheeryal, Keesara District, Hyderabad, Telangana, India"
                        </li>
                        <li><a href="tel:+919876543210">"+91 9876543210"</a></li>
                        <li><a href="mailto:contact@samved.com">"contact@samved.com"</a></li>
                    </ul>
                </div>
            </div>
            <p class="footer__copyright">{copyright(year)}</p>
        </footer>
    }
}
