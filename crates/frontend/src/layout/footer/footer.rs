use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer id="store-footer" class="footer">
            <div class="footer__grid">
                <div class="footer__company">
                    <h3 class="footer__title">"Covergard (Pty) Ltd"</h3>
                    <p class="footer__blurb">
                        "Need exact sizing for your patio suite or braai? Visit us for in-person guidance, fast measuring support, and same-week dispatch options."
                    </p>
                    <div class="footer__details">
                        <p>
                            <span class="footer__detail-label">"Address: "</span>
                            "55 5th Street, Wynberg, Sandton"
                        </p>
                        <p>
                            <span class="footer__detail-label">"Phone: "</span>
                            "+27 21 555 0142"
                        </p>
                        <p>
                            <span class="footer__detail-label">"Operational Hours: "</span>
                            "Mon-Fri, 8:00 AM - 5:00 PM"
                        </p>
                    </div>
                </div>
                <div class="footer__map">
                    <iframe
                        title="CoverGard Store Map"
                        src="https://www.google.com/maps?q=55+5th+street+wynberg+sandton&output=embed"
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                    ></iframe>
                </div>
            </div>
            <p class="footer__copyright">
                {format!("(c) {year} Covergard. Protecting your lifestyle. All rights reserved.")}
            </p>
        </footer>
    }
}
