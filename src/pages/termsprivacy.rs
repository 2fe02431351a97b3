use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::STUDIO_NAME;
use crate::motion::scroll_to_top;
use crate::Route;

fn legal_links() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Terms}>{"Terms & Conditions"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Home}>{"Back to the studio"}</Link<Route>>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    use_effect_with_deps(|_| { scroll_to_top(); || () }, ());

    html! {
        <div class="legal-content privacy-policy">
            <div>
                <h1>{"Privacy Policy"}</h1>

                <section>
                    <h2>{"1. What we collect"}</h2>
                    <p>{"When you use the contact form we collect only what you choose to send:"}</p>
                    <ul>
                        <li>{"Your name and email address, so we can reply"}</li>
                        <li>{"Your company name and budget range, if provided"}</li>
                        <li>{"The services you are interested in and your message"}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"2. Why we collect it"}</h2>
                    <ul>
                        <li>{"To answer your enquiry and prepare a proposal"}</li>
                        <li>{"To keep a record of our conversation if we end up working together"}</li>
                    </ul>
                    <p>{"We never sell your data or add you to a mailing list without asking."}</p>
                </section>

                <section>
                    <h2>{"3. Cookies and analytics"}</h2>
                    <p>{"This site sets no tracking cookies and stores nothing in your browser."}</p>
                </section>

                <section>
                    <h2>{"4. Retention"}</h2>
                    <p>{"Enquiries that don't lead to a project are deleted after twelve months."}</p>
                </section>

                <section>
                    <h2>{"5. Your rights"}</h2>
                    <p>{"You can ask us at any time to:"}</p>
                    <ul>
                        <li>{"See the personal data we hold about you"}</li>
                        <li>{"Correct it"}</li>
                        <li>{"Delete it"}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"6. Contact"}</h2>
                    <p>
                        {"For privacy questions write to "}
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                    </p>
                </section>
                { legal_links() }
            </div>
        </div>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    use_effect_with_deps(|_| { scroll_to_top(); || () }, ());

    html! {
        <div class="legal-content terms-and-conditions">
            <div>
                <h1>{format!("{} Terms and Conditions", STUDIO_NAME)}</h1>

                <section>
                    <h2>{"1. About these terms"}</h2>
                    <p>{"These terms cover your use of this website. Client engagements are governed by a separate agreement signed before any work starts."}</p>
                </section>

                <section>
                    <h2>{"2. Use of the site"}</h2>
                    <p>{"You may browse, share and link to this site. Please don't use it for anything unlawful or in a way that could disrupt it for others."}</p>
                </section>

                <section>
                    <h2>{"3. Our work and credits"}</h2>
                    <ul>
                        <li>{"Case studies are shown with our clients' permission."}</li>
                        <li>{"Trademarks and brand assets belong to their respective owners."}</li>
                        <li>{"Text, design and code of this site may not be reproduced without permission."}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"4. Enquiries"}</h2>
                    <p>{"Sending the contact form does not create a contract. We'll reply with next steps and, where relevant, a written proposal."}</p>
                </section>

                <section>
                    <h2>{"5. Liability"}</h2>
                    <p>{"The site is provided \"as is\". We work to keep it accurate but can't guarantee every detail is current."}</p>
                </section>

                <section>
                    <h2>{"6. Governing law"}</h2>
                    <p>{"These terms are governed by the laws of Finland."}</p>
                </section>
                { legal_links() }
            </div>
        </div>
    }
}
