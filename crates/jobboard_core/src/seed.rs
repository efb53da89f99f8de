//! Sample records shown on a fresh admin panel.

use crate::model::company::Company;
use crate::model::job::Job;

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// Three sample companies with ids `"1"` to `"3"`.
pub fn sample_companies() -> Vec<Company> {
    vec![
        Company {
            id: "1".to_string(),
            title: "Tesla".to_string(),
            description: some("Electric vehicle and clean energy company."),
            image: some(
                "https://th.bing.com/th/id/OIP.sLMJb7kG4Ml52cOMI0zzyQHaEK?rs=1&pid=ImgDetMain",
            ),
            website: some("https://www.tesla.com"),
        },
        Company {
            id: "2".to_string(),
            title: "Apple".to_string(),
            description: some("Technology company that designs and sells electronics."),
            image: some(
                "https://media.wired.com/photos/6081f4280c9b5877078878e2/master/w_2560%2Cc_limit/business_plaintext_apple_1313768378.jpg",
            ),
            website: some("https://www.apple.com"),
        },
        Company {
            id: "3".to_string(),
            title: "Google".to_string(),
            description: some("Search engine and internet-related services company."),
            image: some(
                "https://th.bing.com/th/id/OIP.Z8YCot4USmiAnGGuU9wEpgHaE8?rs=1&pid=ImgDetMain",
            ),
            website: some("https://www.google.com"),
        },
    ]
}

/// Two sample jobs referencing companies `"1"` and `"2"`.
pub fn sample_jobs() -> Vec<Job> {
    vec![
        Job {
            id: "1".to_string(),
            title: "Frontend Developer".to_string(),
            description: "Frontend developer working with React and Redux.".to_string(),
            technologies: ["React", "Redux", "JavaScript", "CSS"]
                .iter()
                .map(|tag| tag.to_string())
                .collect(),
            location: some("Tashkent"),
            salary: "3000 USD".to_string(),
            phone: some("+998901234567"),
            email: some("example@example.com"),
            telegram: some("@frontenddev"),
            instagram: some("@dev_insta"),
            company_id: "1".to_string(),
        },
        Job {
            id: "2".to_string(),
            title: "Backend Developer".to_string(),
            description: "Backend developer working with Node.js and MongoDB.".to_string(),
            technologies: ["Node.js", "MongoDB", "Express"]
                .iter()
                .map(|tag| tag.to_string())
                .collect(),
            location: some("Remote"),
            salary: "3500 USD".to_string(),
            phone: some("+998901234568"),
            email: some("backend@example.com"),
            telegram: some("@backenddev"),
            instagram: some("@backend_insta"),
            company_id: "2".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::{sample_companies, sample_jobs};

    #[test]
    fn sample_jobs_reference_sample_companies() {
        let companies = sample_companies();
        for job in sample_jobs() {
            assert!(companies.iter().any(|company| company.id == job.company_id));
        }
    }
}
