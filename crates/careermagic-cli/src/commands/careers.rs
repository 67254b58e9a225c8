use anyhow::Result;

use careermagic_core::catalog::{default_catalog, find_career};

pub enum CareersAction {
    List,
    Show { id: String },
}

pub fn execute(action: CareersAction) -> Result<()> {
    let catalog = default_catalog();

    match action {
        CareersAction::List => {
            for career in &catalog {
                println!(
                    "{:<24} {} ({} tier, {} demand)",
                    career.id, career.title, career.skill_level, career.job_market_demand
                );
            }
            Ok(())
        }
        CareersAction::Show { id } => {
            let career = find_career(&catalog, &id)
                .ok_or_else(|| anyhow::anyhow!("no career with id {id}"))?;

            println!("{}", career.title);
            println!("{}", career.description);
            println!();
            println!("Required skills: {}", career.requirements.skills.join(", "));
            println!("Education: {}", career.requirements.education);
            println!("Experience: {}", career.requirements.experience);
            println!(
                "Salary: US {} / Europe {} / Asia {}",
                career.salary_range.us, career.salary_range.europe, career.salary_range.asia
            );
            println!("Growth rate: {}", career.growth_rate);
            println!("Market demand: {}", career.job_market_demand);
            if !career.recommended_courses.is_empty() {
                println!();
                println!("Recommended courses:");
                for course in &career.recommended_courses {
                    println!("  - {} ({}) {}", course.name, course.provider, course.url);
                }
            }
            if !career.certifications.is_empty() {
                println!("Certifications: {}", career.certifications.join(", "));
            }
            if !career.top_employers.is_empty() {
                println!("Top employers: {}", career.top_employers.join(", "));
            }
            Ok(())
        }
    }
}
