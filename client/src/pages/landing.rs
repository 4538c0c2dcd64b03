//! Public landing page.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::faq_item::FaqItem;

struct Pillar {
    title: &'static str,
    body: &'static str,
}

struct Offering {
    title: &'static str,
    body: &'static str,
    points: [&'static str; 3],
}

struct Testimonial {
    name: &'static str,
    relation: &'static str,
    quote: &'static str,
    photo_url: &'static str,
}

const PILLARS: &[Pillar] = &[
    Pillar {
        title: "Personalized Learning",
        body: "Tailored educational resources that adapt to each child's unique needs, learning style, and pace.",
    },
    Pillar {
        title: "Family Support",
        body: "Comprehensive resources for parents and caregivers to better understand and support their child's development.",
    },
    Pillar {
        title: "Expert Guidance",
        body: "Access to certified therapists and specialists who provide professional guidance and personalized care.",
    },
];

const OFFERINGS: &[Offering] = &[
    Offering {
        title: "Interactive Learning Games",
        body: "Engaging games designed to develop mathematical skills, emotional regulation, and provide calming sensory experiences.",
        points: [
            "Basic math and numeracy games",
            "Anxiety management and emotional regulation",
            "Calming sounds and sensory activities",
        ],
    },
    Offering {
        title: "Professional Services",
        body: "Access to qualified therapists and specialized support for both children and parents.",
        points: ["One-on-one therapy sessions", "Group support meetings", "Parent-therapist consultations"],
    },
    Offering {
        title: "Progress Tracking",
        body: "Comprehensive dashboards for parents and children to monitor development and achievements.",
        points: [
            "Visual progress charts and milestones",
            "Personalized development insights",
            "Achievement rewards and motivation system",
        ],
    },
    Offering {
        title: "Parental Controls & Support",
        body: "Tools for parents to customize the experience and communicate with specialists.",
        points: [
            "Content and screen time management",
            "Direct messaging with therapists",
            "Resource library for parents",
        ],
    },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        relation: "Parent of Alex, 8",
        quote: "SamVed has been transformative for my son. The math games have made learning fun, and his anxiety levels have decreased significantly with the calming exercises.",
        photo_url: "https://images.pexels.com/photos/733872/pexels-photo-733872.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Testimonial {
        name: "Michael Roberts",
        relation: "Parent of Emma, 6",
        quote: "The therapist chat feature has been invaluable. Having expert guidance at our fingertips has helped us navigate challenging moments with confidence.",
        photo_url: "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Testimonial {
        name: "Jennifer Patel",
        relation: "Parent of Ravi, 9",
        quote: "I love being able to track my son's progress. Seeing his achievements and growth areas helps me understand how to better support him at home.",
        photo_url: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
];

const FAQ: &[(&str, &str)] = &[
    (
        "How can SamVed help my autistic child?",
        "SamVed offers specialized games and activities designed to develop various skills, from math to emotional regulation. Our platform also provides access to professional therapists and a supportive community, creating a holistic approach to your child's development.",
    ),
    (
        "What age range is suitable for SamVed?",
        "Our platform is designed for children aged 4-12, with content and activities tailored to different developmental stages. The games and resources adapt to your child's specific needs and abilities.",
    ),
    (
        "How do the parental controls work?",
        "Parents have access to a dedicated dashboard where they can monitor their child's activity, set screen time limits, approve content, and track progress. You can customize the experience based on your child's unique needs and your family's preferences.",
    ),
    (
        "Are the therapists qualified to work with autistic children?",
        "Yes, all therapists on our platform are licensed professionals with specialized training and experience in working with autistic children. We carefully vet each therapist to ensure they meet our high standards of expertise and compassionate care.",
    ),
    (
        "How secure is my child's information on the platform?",
        "We take privacy and security very seriously. All data is encrypted and stored securely following industry best practices. We never share your child's information with third parties without explicit consent, and we comply with all relevant data protection regulations.",
    ),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <section class="hero">
                <div class="hero__copy">
                    <h1>"Nurturing Growth Through " <span class="hero__accent">"Holistic Development"</span></h1>
                    <p>
                        "SamVed provides compassionate support and engaging resources to help autistic children thrive and reach their full potential."
                    </p>
                    <div class="hero__actions">
                        <A href="/signup" attr:class="button button--light">"Get Started Today →"</A>
                        <A href="/login" attr:class="button button--outline">"Sign In"</A>
                    </div>
                </div>
                <img
                    class="hero__image"
                    src="https://images.pexels.com/photos/8613089/pexels-photo-8613089.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"
                    alt="Children learning together"
                />
            </section>

            <section class="landing__section">
                <h2>"Our Mission"</h2>
                <p class="landing__lead">
                    "We're dedicated to providing supportive, accessible resources for autistic children and their families, fostering growth, independence, and joy through holistic development."
                </p>
                <div class="card-grid card-grid--three">
                    {PILLARS
                        .iter()
                        .map(|p| view! { <div class="pillar"><h3>{p.title}</h3><p>{p.body}</p></div> })
                        .collect_view()}
                </div>
            </section>

            <section class="landing__section landing__section--tinted">
                <h2>"What We Offer"</h2>
                <p class="landing__lead">
                    "SamVed provides a comprehensive platform of tools, games, and services designed specifically for autistic children and their families."
                </p>
                <div class="card-grid card-grid--two">
                    {OFFERINGS
                        .iter()
                        .enumerate()
                        .map(|(i, o)| {
                            view! {
                                <div class="offering">
                                    <h3><span class="offering__number">{i + 1}</span>{o.title}</h3>
                                    <p>{o.body}</p>
                                    <ul>{o.points.iter().map(|point| view! { <li>{*point}</li> }).collect_view()}</ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <A href="/signup" attr:class="button">"Explore All Features →"</A>
            </section>

            <section class="landing__section">
                <h2>"What Parents Say"</h2>
                <p class="landing__lead">"Hear from families who have experienced positive changes through our platform."</p>
                <div class="card-grid card-grid--three">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <figure class="testimonial">
                                    <img src=t.photo_url alt="Parent testimonial"/>
                                    <figcaption>
                                        <h4>{t.name}</h4>
                                        <p>{t.relation}</p>
                                    </figcaption>
                                    <blockquote>{format!("\"{}\"", t.quote)}</blockquote>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="landing__section landing__section--tinted">
                <h2>"Frequently Asked Questions"</h2>
                <p class="landing__lead">"Find answers to common questions about our platform and services."</p>
                <div class="faq">
                    {FAQ.iter().map(|(q, a)| view! { <FaqItem question=*q answer=*a/> }).collect_view()}
                </div>
            </section>

            <section class="cta">
                <h2>"Ready to Start Your Journey?"</h2>
                <p>
                    "Join thousands of families who have experienced positive changes through our holistic approach to supporting autistic children."
                </p>
                <div class="cta__actions">
                    <A href="/signup" attr:class="button button--light">"Create an Account"</A>
                    <a href="mailto:contact@samved.com" class="button button--outline">"Contact Us"</a>
                </div>
            </section>
        </div>
    }
}
