//! Hard-coded description of the legacy Law Park Educational Trust site.
//!
//! The download job itself is data-driven; this module is the one place
//! that knows the old site's URLs and copy. Content strings were lifted
//! from the live pages by hand.

use migrate_web::content::{
    About, Contact, Impact, ImpactStatistics, Mission, ProcessOverview, ProcessStep, SiteContent,
    Testimonial, Trustee,
};
use migrate_web::{AssetCatalog, AssetGroup};

/// CDN host all legacy site images are served from.
const CDN_BASE: &str =
    "https://dce8a5e5981c702a93be-995a5d988a36b22304388b702a0355a7.ssl.cf1.rackcdn.com";

/// Gallery screenshots worth mirroring; the rest are near-duplicates.
const GALLERY_LIMIT: usize = 10;

fn cdn(file: &str) -> String {
    format!("{}/{}", CDN_BASE, file)
}

/// Every image the legacy site serves, grouped by page section.
pub fn asset_catalog() -> AssetCatalog {
    let mut catalog = AssetCatalog::default();

    catalog.push(AssetGroup::new(
        "logo",
        vec![cdn("1712312035397lawparkeducationaltrustonlylogo.png")],
    ));
    catalog.push(AssetGroup::new(
        "hero",
        vec![cdn(
            "1685527116208cuteindianfarmerchildstudyingwithhisfatherhomescaled.jpeg",
        )],
    ));
    catalog.push(AssetGroup::new(
        "homepage",
        vec![
            cdn("1685533437292istockphoto1097817298170667a.jpeg"),
            cdn("1685533434260photo1582886986183f8d30e8a1ac3.jpeg"),
            cdn("1685533431325istockphoto1163984047170667a.jpeg"),
        ],
    ));
    catalog.push(AssetGroup::new(
        "about",
        vec![
            cdn("1685522521637educationiskeytoresolveallissues.jpeg"),
            cdn("1685533195276biharindiafebruary152016unidentifiedchilderngoschool1.jpeg"),
        ],
    ));
    catalog.push(
        AssetGroup::new(
            "gallery",
            vec![
                cdn("1685615031850Screenshot13.png"),
                cdn("1685615024990Screenshot17.png"),
                cdn("1685615016480Screenshot18.png"),
                cdn("1685615008941Screenshot15.png"),
                cdn("1685615001984Screenshot16.png"),
                cdn("1685614995721Screenshot19.png"),
                cdn("1685614989987Screenshot65.png"),
                cdn("1685614982927Screenshot66.png"),
                cdn("1685614978248Screenshot62.png"),
                cdn("1685614973424Screenshot60.png"),
                cdn("1685614968252Screenshot28.png"),
                cdn("1685614962209Screenshot26.png"),
                cdn("1685614956359Screenshot29.png"),
                cdn("1685614948974Screenshot23.png"),
                cdn("1685614940919Screenshot20.png"),
                cdn("1685614935442Screenshot25.png"),
                cdn("1685614924111Screenshot24.png"),
                cdn("1685614914552Screenshot30.png"),
            ],
        )
        .with_limit(GALLERY_LIMIT),
    );

    catalog
}

/// The legacy site's copy, as shown in the browser.
pub fn site_content() -> SiteContent {
    SiteContent {
        mission: Mission {
            tagline: "Making Bleak Futures, Brighter".to_string(),
            description: "Law Park Educational Trust helps children from rural areas across \
                          India get their right to education through partially funded \
                          scholarships."
                .to_string(),
            statistic: "35 Million+ Children In India Between The Age Of 6-14 Do Not Go To School"
                .to_string(),
        },
        about: About {
            title: "When It Comes To Education, No Child Deserves To Be Left Behind".to_string(),
            description: "We Law Park Education Trust (LPET) are on a mission to give deserving \
                          children a chance at a better future by allowing them to discover \
                          their potential and become contributing members of society."
                .to_string(),
            quote: "From Little Seeds grows mighty trees".to_string(),
        },
        impact: Impact {
            points: vec![
                "We put underprivileged children in classrooms and give them their right to \
                 education and their risks of exploitation through child labour. They \
                 eventually become confident enough to face their life."
                    .to_string(),
                "We educate the girl child and play a part in ensuring that they do not become \
                 victims of child marriage."
                    .to_string(),
                "We create a future generation of bright talent that adds value to society and \
                 takes part in imparting positive changes in their communities."
                    .to_string(),
            ],
            statistics: ImpactStatistics {
                years: "10+ Years Of Giving children access to education".to_string(),
                students: "200+ students supported and counting (from 2016 to till date)"
                    .to_string(),
                villages: "50+ Villages with 4 south Indian states".to_string(),
                donors: "100+ Donors".to_string(),
            },
        },
        trustees: vec![
            Trustee {
                name: "Ms. Charulatha".to_string(),
                role: "Managing Trustee".to_string(),
                bio: "Ms. Charulatha, Founder of Law Park Educational Trust, during her young \
                      age used to teach poor children in her locality free of cost. That was \
                      the foundation to start this Educational Trust in the name of Law Park \
                      Educational Trust. She did her B.A Economics, Chennai and did her L.LB., \
                      at Bangalore and completed with PGDIPRL in National Law School of India, \
                      University, Bangalore. Ms. Charulatha, always encouraged children to \
                      study and many times she would pay fees to those children even before \
                      she started this Trust. Most of the times she is surrounded with \
                      children asking doubts in their studies which continued even today."
                    .to_string(),
            },
            Trustee {
                name: "MR. S.M. MANJUNATHA".to_string(),
                role: "Trustee".to_string(),
                bio: "Hailing from the small and beautiful village name Sadenahalli in \
                      Karnataka and a Trustee of Law Park Educational Trust. Since childhood, \
                      he had always had a passion for inspiring the poor and so, he was the \
                      first member of his family to leave the village he was born and raised \
                      in to study in the city. He graduted with a degree in Law from Bangalore \
                      and encouraged his fellow friends and cousins to follow in his footsteps \
                      and also graduate. Moreover, he funded many children from his village \
                      who have now grown into well settled, contributing members of society."
                    .to_string(),
            },
        ],
        process: ProcessOverview {
            title: "How We Advance Our Mission".to_string(),
            steps: vec![
                ProcessStep {
                    title: "Identify".to_string(),
                    description: "School principals, well-wishers, and citizens of communities \
                                  nominate deserving students from income deprived backgrounds \
                                  who need financial support to continue their education."
                        .to_string(),
                },
                ProcessStep {
                    title: "Validate".to_string(),
                    description: "We visit to location, gather the students with parents in \
                                  one place and interview each student nomined and their \
                                  parents to verify the genuineness of their case and help \
                                  them financially for their education."
                        .to_string(),
                },
                ProcessStep {
                    title: "Embrace".to_string(),
                    description: "We take the children under our folds and pay up to 75% of \
                                  their tuition fees at their current school. The parents will \
                                  cover the remaining part of the tuition fees to ensure their \
                                  involvement in educating their children. We believe that \
                                  anything given for fully free will have no value."
                        .to_string(),
                },
                ProcessStep {
                    title: "Incubate".to_string(),
                    description: "Our team will pay the school fees directly to the school \
                                  rather than giving them to the parents to prevent \
                                  misappropriation of the funds. As a result, students can \
                                  focus solely on their studies without constantly worrying \
                                  about finances, tap into their fullest potential and thrive \
                                  throughout their academic careers."
                        .to_string(),
                },
            ],
        },
        testimonials: vec![
            Testimonial {
                text: "I'm impressed with the dedication & focus in bringing back the children \
                       to school, I echo their thoughts & approach in short listing each \
                       student to ensure their success is unparalleled. Appreciate this CSR \
                       initiative from Law Park Educational Trust!!"
                    .to_string(),
                author: "Sreekanth".to_string(),
                role: "Director, Tech Hat Pvt., Ltd.".to_string(),
            },
            Testimonial {
                text: "We have known Law Park Educational Trust for few years. It is a genuine \
                       and selfless effort of the Trustees to provide financial and other \
                       educational resources to children in need with the main goal of right \
                       to education regardless of socioeconomic background."
                    .to_string(),
                author: "Dr. Varalakshmi and Dr. Nandakumar".to_string(),
                role: "Hershey, USA".to_string(),
            },
            Testimonial {
                text: "Law Park Education Trust is doing a phenomenal work by facilitating the \
                       provision of basic right of education to the underprivileged children \
                       of our society and country at large."
                    .to_string(),
                author: "Aishwarya K".to_string(),
                role: "Director, Versalis International".to_string(),
            },
        ],
        contact: Contact {
            phone: "+91-9945665379".to_string(),
            email: "empower@lawparkeducationaltrust.org".to_string(),
        },
    }
}
