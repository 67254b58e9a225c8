use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Experience tier a career targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillTier {
    Entry,
    #[serde(rename = "Mid-Level")]
    MidLevel,
    Senior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketDemand {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRequirements {
    pub skills: Vec<String>,
    pub education: String,
    pub experience: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub us: String,
    pub europe: String,
    pub asia: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub provider: String,
    pub url: String,
}

/// A catalog entry. Static and read-only at scoring time; the scorer never
/// mutates it and only the title, description, required skills, and required
/// education feed the matching algorithm. The rest is display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub id: String,
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub requirements: CareerRequirements,
    pub salary_range: SalaryRange,
    pub job_market_demand: MarketDemand,
    pub growth_rate: String,
    pub recommended_courses: Vec<Course>,
    pub certifications: Vec<String>,
    pub top_employers: Vec<String>,
    pub skill_level: SkillTier,
    pub icon: String,
}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SkillTier::Entry => "Entry",
            SkillTier::MidLevel => "Mid-Level",
            SkillTier::Senior => "Senior",
        };
        write!(f, "{value}")
    }
}

impl FromStr for SkillTier {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "entry" => Ok(SkillTier::Entry),
            "mid-level" | "mid" => Ok(SkillTier::MidLevel),
            "senior" => Ok(SkillTier::Senior),
            _ => Err(format!("unknown skill tier: {value}")),
        }
    }
}

impl fmt::Display for MarketDemand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            MarketDemand::High => "High",
            MarketDemand::Medium => "Medium",
            MarketDemand::Low => "Low",
        };
        write!(f, "{value}")
    }
}

fn course(name: &str, provider: &str, url: &str) -> Course {
    Course {
        name: name.to_string(),
        provider: provider.to_string(),
        url: url.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// The built-in career catalog.
pub fn default_catalog() -> Vec<Career> {
    vec![
        Career {
            id: "software-engineer".to_string(),
            title: "Software Engineer".to_string(),
            description: "Software Engineers design, develop, and maintain software systems and applications. They work on everything from web and mobile applications to operating systems and network control systems. They collaborate with cross-functional teams, write clean and efficient code, debug issues, and continuously improve software performance and user experience.".to_string(),
            short_description: "Design and build applications and systems that power modern technology.".to_string(),
            requirements: CareerRequirements {
                skills: strings(&["JavaScript", "Python", "Java", "C++", "SQL", "REST APIs", "Git", "Agile methodologies"]),
                education: "Bachelor's degree in Computer Science or related field".to_string(),
                experience: "Entry-level positions available with internship experience".to_string(),
            },
            salary_range: SalaryRange {
                us: "$75,000 - $150,000".to_string(),
                europe: "€55,000 - €95,000".to_string(),
                asia: "$30,000 - $80,000".to_string(),
            },
            job_market_demand: MarketDemand::High,
            growth_rate: "22% (Much faster than average)".to_string(),
            recommended_courses: vec![
                course(
                    "Computer Science: Programming with a Purpose",
                    "Coursera (Princeton)",
                    "https://www.coursera.org/learn/cs-programming-java",
                ),
                course(
                    "The Complete 2023 Web Development Bootcamp",
                    "Udemy",
                    "https://www.udemy.com/course/the-complete-web-development-bootcamp/",
                ),
            ],
            certifications: strings(&[
                "AWS Certified Developer",
                "Microsoft Certified: Azure Developer Associate",
                "Oracle Certified Professional: Java SE Programmer",
            ]),
            top_employers: strings(&["Google", "Microsoft", "Amazon", "Apple", "Facebook"]),
            skill_level: SkillTier::Entry,
            icon: "code".to_string(),
        },
        Career {
            id: "data-scientist".to_string(),
            title: "Data Scientist".to_string(),
            description: "Data Scientists analyze large datasets to extract meaningful insights and patterns. They use statistical methods, machine learning algorithms, and data visualization techniques to solve complex business problems. Their work involves data cleaning, model development, hypothesis testing, and communicating findings to stakeholders.".to_string(),
            short_description: "Analyze complex datasets to drive business decisions through statistical insights.".to_string(),
            requirements: CareerRequirements {
                skills: strings(&["Python", "R", "SQL", "Machine Learning", "Statistics", "Data Visualization", "TensorFlow/PyTorch"]),
                education: "Master's degree in Statistics, Computer Science, or related field".to_string(),
                experience: "1-3 years in analytics or research roles preferred".to_string(),
            },
            salary_range: SalaryRange {
                us: "$90,000 - $160,000".to_string(),
                europe: "€60,000 - €110,000".to_string(),
                asia: "$40,000 - $90,000".to_string(),
            },
            job_market_demand: MarketDemand::High,
            growth_rate: "31% (Much faster than average)".to_string(),
            recommended_courses: vec![
                course(
                    "Data Science Specialization",
                    "Coursera (Johns Hopkins)",
                    "https://www.coursera.org/specializations/jhu-data-science",
                ),
                course(
                    "Machine Learning",
                    "Coursera (Stanford)",
                    "https://www.coursera.org/learn/machine-learning",
                ),
            ],
            certifications: strings(&[
                "IBM Data Science Professional Certificate",
                "Microsoft Certified: Azure Data Scientist Associate",
                "Google Professional Data Engineer",
            ]),
            top_employers: strings(&["Amazon", "Meta", "Netflix", "IBM", "Spotify"]),
            skill_level: SkillTier::MidLevel,
            icon: "bar-chart".to_string(),
        },
        Career {
            id: "ux-designer".to_string(),
            title: "UX Designer".to_string(),
            description: "UX Designers focus on creating intuitive, enjoyable user experiences for digital products. They conduct user research, create wireframes and prototypes, perform usability testing, and collaborate with developers to implement designs. Their goal is to ensure products meet user needs while aligning with business objectives.".to_string(),
            short_description: "Create intuitive, enjoyable experiences for users interacting with digital products.".to_string(),
            requirements: CareerRequirements {
                skills: strings(&["User Research", "Wireframing", "Prototyping", "Figma/Sketch", "Information Architecture", "Usability Testing"]),
                education: "Bachelor's degree in Design, Psychology, or related field".to_string(),
                experience: "Portfolio demonstrating UX process and thinking".to_string(),
            },
            salary_range: SalaryRange {
                us: "$70,000 - $130,000".to_string(),
                europe: "€45,000 - €85,000".to_string(),
                asia: "$25,000 - $65,000".to_string(),
            },
            job_market_demand: MarketDemand::Medium,
            growth_rate: "8% (As fast as average)".to_string(),
            recommended_courses: vec![
                course(
                    "Google UX Design Professional Certificate",
                    "Coursera",
                    "https://www.coursera.org/professional-certificates/google-ux-design",
                ),
                course(
                    "User Experience: Research & Prototyping",
                    "Interaction Design Foundation",
                    "https://www.interaction-design.org/courses/user-experience-the-beginner-s-guide",
                ),
            ],
            certifications: strings(&[
                "Nielsen Norman Group UX Certification",
                "Certified Usability Analyst (CUA)",
                "UX Management Institute Certification",
            ]),
            top_employers: strings(&["Apple", "Google", "Microsoft", "Airbnb", "Uber"]),
            skill_level: SkillTier::Entry,
            icon: "layout".to_string(),
        },
        Career {
            id: "cybersecurity-analyst".to_string(),
            title: "Cybersecurity Analyst".to_string(),
            description: "Cybersecurity Analysts monitor and protect organizations from digital threats and security breaches. They analyze security systems, investigate incidents, implement security measures, develop security protocols, and stay informed about emerging threats. Their role is critical in safeguarding sensitive information and maintaining business continuity.".to_string(),
            short_description: "Protect organizations from digital threats and security breaches.".to_string(),
            requirements: CareerRequirements {
                skills: strings(&["Network Security", "Security Frameworks", "Penetration Testing", "Threat Analysis", "Security Tools", "Incident Response"]),
                education: "Bachelor's degree in Cybersecurity, Computer Science, or related field".to_string(),
                experience: "2-4 years in IT or security roles preferred".to_string(),
            },
            salary_range: SalaryRange {
                us: "$85,000 - $150,000".to_string(),
                europe: "€55,000 - €95,000".to_string(),
                asia: "$35,000 - $75,000".to_string(),
            },
            job_market_demand: MarketDemand::High,
            growth_rate: "33% (Much faster than average)".to_string(),
            recommended_courses: vec![
                course(
                    "Introduction to Cybersecurity",
                    "edX (NYU)",
                    "https://www.edx.org/professional-certificate/uwashingtonx-essentials-cybersecurity",
                ),
                course(
                    "Cyber Security Specialization",
                    "Coursera (University of Maryland)",
                    "https://www.coursera.org/specializations/cyber-security",
                ),
            ],
            certifications: strings(&[
                "CompTIA Security+",
                "Certified Information Systems Security Professional (CISSP)",
                "Certified Ethical Hacker (CEH)",
            ]),
            top_employers: strings(&["IBM", "Cisco", "Microsoft", "Amazon", "Government Agencies"]),
            skill_level: SkillTier::MidLevel,
            icon: "shield".to_string(),
        },
        Career {
            id: "cloud-architect".to_string(),
            title: "Cloud Architect".to_string(),
            description: "Cloud Architects design and implement cloud computing strategies for organizations. They evaluate cloud applications, oversee cloud adoption plans, design and migrate workloads, ensure security and compliance, and manage cloud infrastructure. They play a key role in helping businesses leverage cloud technologies efficiently and securely.".to_string(),
            short_description: "Design and oversee cloud computing strategies and infrastructure for organizations.".to_string(),
            requirements: CareerRequirements {
                skills: strings(&["AWS/Azure/GCP", "Infrastructure as Code", "Cloud Security", "Networking", "Containerization", "Microservices"]),
                education: "Bachelor's degree in Computer Science or related field".to_string(),
                experience: "5+ years in IT infrastructure or related roles".to_string(),
            },
            salary_range: SalaryRange {
                us: "$120,000 - $200,000".to_string(),
                europe: "€80,000 - €130,000".to_string(),
                asia: "$50,000 - $120,000".to_string(),
            },
            job_market_demand: MarketDemand::High,
            growth_rate: "15% (Faster than average)".to_string(),
            recommended_courses: vec![
                course(
                    "AWS Certified Solutions Architect",
                    "AWS Training",
                    "https://aws.amazon.com/certification/certified-solutions-architect-associate/",
                ),
                course(
                    "Microsoft Azure Fundamentals",
                    "Microsoft Learn",
                    "https://learn.microsoft.com/en-us/certifications/azure-fundamentals/",
                ),
            ],
            certifications: strings(&[
                "AWS Certified Solutions Architect",
                "Microsoft Certified: Azure Solutions Architect",
                "Google Professional Cloud Architect",
            ]),
            top_employers: strings(&["Amazon Web Services", "Microsoft", "Google Cloud", "IBM Cloud", "Oracle Cloud"]),
            skill_level: SkillTier::Senior,
            icon: "cloud".to_string(),
        },
        Career {
            id: "devops-engineer".to_string(),
            title: "DevOps Engineer".to_string(),
            description: "DevOps Engineers bridge the gap between software development and IT operations. They implement automation, manage CI/CD pipelines, oversee infrastructure deployment, and ensure system reliability. Their work focuses on improving collaboration, increasing deployment frequency, and maintaining service stability for better business outcomes.".to_string(),
            short_description: "Implement automation and streamline development and operations processes.".to_string(),
            requirements: CareerRequirements {
                skills: strings(&["CI/CD", "Docker", "Kubernetes", "Infrastructure as Code", "Cloud Platforms", "Scripting", "Linux/Unix"]),
                education: "Bachelor's degree in Computer Science or related field".to_string(),
                experience: "3+ years in IT, development, or operations roles".to_string(),
            },
            salary_range: SalaryRange {
                us: "$95,000 - $165,000".to_string(),
                europe: "€65,000 - €110,000".to_string(),
                asia: "$40,000 - $95,000".to_string(),
            },
            job_market_demand: MarketDemand::High,
            growth_rate: "22% (Much faster than average)".to_string(),
            recommended_courses: vec![
                course(
                    "DevOps on AWS",
                    "Coursera",
                    "https://www.coursera.org/specializations/aws-fundamentals",
                ),
                course(
                    "Docker and Kubernetes: The Complete Guide",
                    "Udemy",
                    "https://www.udemy.com/course/docker-and-kubernetes-the-complete-guide/",
                ),
            ],
            certifications: strings(&[
                "AWS Certified DevOps Engineer",
                "Docker Certified Associate",
                "Certified Kubernetes Administrator (CKA)",
            ]),
            top_employers: strings(&["Amazon", "Google", "Microsoft", "Netflix", "Atlassian"]),
            skill_level: SkillTier::MidLevel,
            icon: "git-merge".to_string(),
        },
    ]
}

/// Look up a catalog entry by id.
pub fn find_career<'a>(catalog: &'a [Career], id: &str) -> Option<&'a Career> {
    catalog.iter().find(|career| career.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_unique_ids() {
        let catalog = default_catalog();
        let mut ids: Vec<_> = catalog.iter().map(|career| career.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn find_career_by_id() {
        let catalog = default_catalog();
        let career = find_career(&catalog, "data-scientist").unwrap();
        assert_eq!(career.title, "Data Scientist");
        assert_eq!(career.skill_level, SkillTier::MidLevel);
        assert_eq!(career.job_market_demand, MarketDemand::High);
    }

    #[test]
    fn unknown_id_returns_none() {
        let catalog = default_catalog();
        assert!(find_career(&catalog, "astronaut").is_none());
    }
}
