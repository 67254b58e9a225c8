use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use careermagic_core::quiz::{skill_catalog, QuizSession, TOTAL_STEPS};
use careermagic_core::types::{
    EducationLevel, InterestArea, QuizResponses, SkillLevel, WorkStyle,
};

/// Walks the five questionnaire steps on a plain line-based terminal and
/// returns the completed answers. Prompts repeat until the answer parses.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<QuizResponses> {
    let mut session = QuizSession::new();

    writeln!(output, "Step 1 of {TOTAL_STEPS}: Rate your skills")?;
    for name in skill_catalog() {
        let level = prompt_skill_level(input, output, name)?;
        session.set_skill(name, level);
    }
    session.next_step();

    writeln!(output)?;
    writeln!(output, "Step 2 of {TOTAL_STEPS}: Pick your interest areas")?;
    writeln!(
        output,
        "Options: Programming, Data, Design, Infrastructure, Security"
    )?;
    for interest in prompt_interests(input, output)? {
        session.toggle_interest(interest);
    }
    session.next_step();

    writeln!(output)?;
    writeln!(output, "Step 3 of {TOTAL_STEPS}: Preferred work style")?;
    session.set_work_style(prompt_work_style(input, output)?);
    session.next_step();

    writeln!(output)?;
    writeln!(output, "Step 4 of {TOTAL_STEPS}: Education level")?;
    session.set_education_level(prompt_education(input, output)?);
    session.next_step();

    writeln!(output)?;
    writeln!(output, "Step 5 of {TOTAL_STEPS}: Anything else?")?;
    write!(output, "Preferred salary range (optional): ")?;
    output.flush()?;
    session.set_preferred_salary(read_line(input)?.trim().to_string());
    write!(output, "Additional notes (optional): ")?;
    output.flush()?;
    session.set_additional_notes(read_line(input)?.trim().to_string());

    Ok(session.responses)
}

fn prompt_skill_level<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    name: &str,
) -> Result<SkillLevel> {
    loop {
        write!(output, "  {name} [1=Beginner, 2=Intermediate, 3=Advanced]: ")?;
        output.flush()?;
        match read_line(input)?.trim() {
            "1" => return Ok(SkillLevel::Beginner),
            "2" => return Ok(SkillLevel::Intermediate),
            "3" => return Ok(SkillLevel::Advanced),
            _ => writeln!(output, "  Please answer 1, 2, or 3.")?,
        }
    }
}

fn prompt_interests<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Vec<InterestArea>> {
    loop {
        write!(output, "  Interests (comma separated): ")?;
        output.flush()?;
        let line = read_line(input)?;

        let mut interests: Vec<InterestArea> = Vec::new();
        let mut valid = true;
        for part in line.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            match part.parse::<InterestArea>() {
                Ok(interest) => {
                    if !interests.contains(&interest) {
                        interests.push(interest);
                    }
                }
                Err(_) => {
                    writeln!(output, "  Unknown interest area: {part}")?;
                    valid = false;
                    break;
                }
            }
        }

        if valid && !interests.is_empty() {
            return Ok(interests);
        }
        if valid {
            writeln!(output, "  Please pick at least one interest area.")?;
        }
    }
}

fn prompt_work_style<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<WorkStyle> {
    loop {
        write!(output, "  Work style [1=Remote, 2=Hybrid, 3=On-site]: ")?;
        output.flush()?;
        match read_line(input)?.trim() {
            "1" => return Ok(WorkStyle::Remote),
            "2" => return Ok(WorkStyle::Hybrid),
            "3" => return Ok(WorkStyle::OnSite),
            _ => writeln!(output, "  Please answer 1, 2, or 3.")?,
        }
    }
}

fn prompt_education<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<EducationLevel> {
    loop {
        write!(
            output,
            "  Education [1=High School, 2=Associate's, 3=Bachelor's, 4=Master's, 5=PhD]: "
        )?;
        output.flush()?;
        match read_line(input)?.trim() {
            "1" => return Ok(EducationLevel::HighSchool),
            "2" => return Ok(EducationLevel::Associates),
            "3" => return Ok(EducationLevel::Bachelors),
            "4" => return Ok(EducationLevel::Masters),
            "5" => return Ok(EducationLevel::Phd),
            _ => writeln!(output, "  Please answer 1 through 5.")?,
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("read answer")?;
    if read == 0 {
        anyhow::bail!("input ended before the quiz was complete");
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn complete_script() -> String {
        let mut lines: Vec<String> = Vec::new();
        for index in 0..skill_catalog().len() {
            lines.push(((index % 3) + 1).to_string());
        }
        lines.push("data, security".to_string());
        lines.push("1".to_string());
        lines.push("4".to_string());
        lines.push("$100k+".to_string());
        lines.push("I like machine learning".to_string());
        lines.join("\n") + "\n"
    }

    #[test]
    fn wizard_collects_complete_responses() {
        let script = complete_script();
        let mut input = Cursor::new(script.into_bytes());
        let mut output = Vec::new();

        let responses = run(&mut input, &mut output).unwrap();

        assert!(careermagic_core::quiz::validate_responses(&responses).is_ok());
        assert_eq!(
            responses.interests,
            vec![InterestArea::Data, InterestArea::Security]
        );
        assert_eq!(responses.work_style, WorkStyle::Remote);
        assert_eq!(responses.education_level, EducationLevel::Masters);
        assert_eq!(responses.preferred_salary, "$100k+");
        assert_eq!(responses.additional_notes, "I like machine learning");
        assert_eq!(responses.skills[0].level, SkillLevel::Beginner);
        assert_eq!(responses.skills[1].level, SkillLevel::Intermediate);
        assert_eq!(responses.skills[2].level, SkillLevel::Advanced);
    }

    #[test]
    fn invalid_answers_reprompt() {
        let mut script = String::from("9\nnope\n1\n");
        for _ in 1..skill_catalog().len() {
            script.push_str("2\n");
        }
        script.push_str("data\n1\n3\n\n\n");
        let mut input = Cursor::new(script.into_bytes());
        let mut output = Vec::new();

        let responses = run(&mut input, &mut output).unwrap();

        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.contains("Please answer 1, 2, or 3."));
        assert_eq!(responses.skills[0].level, SkillLevel::Beginner);
        assert_eq!(responses.education_level, EducationLevel::Bachelors);
    }

    #[test]
    fn truncated_input_fails_cleanly() {
        let mut input = Cursor::new(b"1\n2\n".to_vec());
        let mut output = Vec::new();

        let err = run(&mut input, &mut output).unwrap_err();
        assert!(err.to_string().contains("input ended"));
    }

    #[test]
    fn unknown_interest_reprompts() {
        let mut script = String::new();
        for _ in 0..skill_catalog().len() {
            script.push_str("1\n");
        }
        script.push_str("knitting\ndesign\n2\n2\n\n\n");
        let mut input = Cursor::new(script.into_bytes());
        let mut output = Vec::new();

        let responses = run(&mut input, &mut output).unwrap();

        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.contains("Unknown interest area: knitting"));
        assert_eq!(responses.interests, vec![InterestArea::Design]);
        assert_eq!(responses.work_style, WorkStyle::Hybrid);
    }
}
