//! Clause generators
//!
//! Each generator is a pure function of the entities it is given. The same
//! input always yields the same text; the only date used is the one passed
//! to [`testimonium_clause`].

use chrono::NaiveDate;
use core_kernel::format_legal_date;
use domain_estate::{Asset, Beneficiary, BequestTemplate, Person, Testator};

use crate::aggregate::{MAX_EXECUTORS, WITNESS_COUNT};
use crate::error::ClauseError;

const SIGNATURE_LINE: &str = "________________________________________";

const EPF_CAVEAT: &str =
    "NOTE: EPF requires separate nomination at kwsp.gov.my. Will provisions are backup only.";

const INSURANCE_CAVEAT: &str = "NOTE: Insurance proceeds are paid to the nominee registered with \
the insurer. Will provisions are backup only.";

/// "NAME (NRIC NO. 820202-10-2345)"
fn identify(person: &Person) -> String {
    format!("{} (NRIC NO. {})", person.display_name(), person.formatted_nric())
}

/// "my brother, NAME (NRIC NO. ...)" or "NAME (NRIC NO. ...)" if no relationship
fn recipient(person: &Person) -> String {
    match &person.relationship {
        Some(relationship) => format!("my {}, {}", relationship, identify(person)),
        None => identify(person),
    }
}

pub fn opening_declaration(testator: &Testator) -> String {
    format!(
        "LAST WILL AND TESTAMENT\n\n\
         I, {} of {}, being of sound mind and disposing memory, DO HEREBY REVOKE all former \
         testamentary dispositions, wills or codicils heretofore made by me AND DECLARE this to \
         be my LAST WILL AND TESTAMENT.",
        identify(&testator.person),
        testator.person.address
    )
}

/// Appoints the first executor and lists the rest as ordered fallbacks
///
/// # Errors
///
/// Fails with no executors or more than four.
pub fn executor_clause(executors: &[Person]) -> Result<String, ClauseError> {
    let (primary, alternates) = match executors.split_first() {
        None => return Err(ClauseError::NoExecutors),
        Some(_) if executors.len() > MAX_EXECUTORS => {
            return Err(ClauseError::TooManyExecutors(executors.len()))
        }
        Some(split) => split,
    };

    let mut clause = format!(
        "EXECUTOR APPOINTMENT\n\n\
         I APPOINT my {}, {} of {} to be the Executor and Trustee of this my Will.",
        primary.relationship.as_deref().unwrap_or("trusted person"),
        identify(primary),
        primary.address
    );

    if !alternates.is_empty() {
        clause.push_str(&format!(
            "\n\nIF my said {} shall predecease me or be unwilling or unable to act, THEN I \
             APPOINT the following persons, in the order named, to be my Executor(s) and \
             Trustee(s):",
            primary.relationship.as_deref().unwrap_or("Executor")
        ));
        for (i, executor) in alternates.iter().enumerate() {
            clause.push_str(&format!(
                "\n{}. {} of {}",
                i + 1,
                identify(executor),
                executor.address
            ));
        }
    }

    Ok(clause)
}

pub fn debts_clause() -> String {
    "PAYMENT OF DEBTS AND EXPENSES\n\n\
     I DIRECT my Executor to pay my just debts, funeral and testamentary expenses, and estate \
     duty (if any) out of my estate as soon as practicable after my death."
        .to_string()
}

pub fn distribution_header() -> &'static str {
    "DISTRIBUTION OF ASSETS"
}

/// Renders one asset gift using the template from the asset type's profile
///
/// Missing optional details fall back to the description or a bracketed
/// placeholder.
pub fn specific_bequest(asset: &Asset, beneficiary: &Beneficiary) -> String {
    let to = recipient(&beneficiary.person);
    let detail = |key: &str, fallback: &str| asset.detail(key).unwrap_or(fallback).to_string();

    match asset.asset_type.profile().template {
        BequestTemplate::RealProperty => format!(
            "I give, devise and bequeath my property known as {} held under Title No. {} to {}, \
             absolutely.",
            detail("address", &asset.description),
            detail("title_number", "[Title Number]"),
            to
        ),
        BequestTemplate::BankAccount => format!(
            "I give all my bank accounts, deposits, and cash holdings with {} to {}, absolutely.",
            detail("bank_name", "[Bank Name]"),
            to
        ),
        BequestTemplate::Investment => format!(
            "I give all my {} held with {}, together with all dividends, bonuses and accretions, \
             to {}, absolutely.",
            detail("investment_type", &asset.description),
            detail("institution", "[Institution]"),
            to
        ),
        BequestTemplate::Vehicle => format!(
            "I give my motor vehicle registration number {} ({}) to {}, absolutely.",
            detail("registration_number", "[Reg No]"),
            detail("make_model", &asset.description),
            to
        ),
        BequestTemplate::Epf => format!(
            "I have nominated beneficiaries for my EPF/KWSP benefits with the Employees Provident \
             Fund Board. I direct my Trustee to ensure such nominations remain valid and current. \
             Should there be no valid nomination registered with EPF at the time of my death, I \
             direct that all my EPF/KWSP savings and contributions be distributed to {}.\n\n{}",
            to, EPF_CAVEAT
        ),
        BequestTemplate::Business => format!(
            "I give all my shares and interests in {} (Company No. {}) comprising {}% \
             shareholding, together with all goodwill, intellectual property, trade names, and \
             business assets, to {}, absolutely.",
            detail("company_name", &asset.description),
            detail("registration_number", "[Reg No]"),
            detail("ownership_percentage", "100").trim_end_matches('%'),
            to
        ),
        BequestTemplate::Digital => format!(
            "I give all my digital assets including {} to {}, absolutely. Access credentials are \
             stored at {}.",
            detail("asset_description", &asset.description),
            to,
            detail("access_location", "[Secure Location]")
        ),
        BequestTemplate::Insurance => {
            let policy = asset
                .detail("policy_number")
                .map(|number| format!(" (Policy No. {})", number))
                .unwrap_or_default();
            format!(
                "Subject to any nomination made under the policy, I give all my rights and \
                 benefits under {}{} to {}, absolutely.\n\n{}",
                asset.description, policy, to, INSURANCE_CAVEAT
            )
        }
        BequestTemplate::Generic => format!("I give {} to {}, absolutely.", asset.description, to),
    }
}

/// Disposes of everything not given away specifically
///
/// Beneficiaries tagged `residuary` take the residue; if none are tagged,
/// it is shared among all beneficiaries.
pub fn residuary_clause(beneficiaries: &[Beneficiary]) -> String {
    let tagged: Vec<&Beneficiary> = beneficiaries.iter().filter(|b| b.is_residuary()).collect();

    let body = if tagged.is_empty() {
        match beneficiaries {
            [only] => format!(
                "I give all the rest, residue, and remainder of my estate, both real and personal, \
                 of whatsoever nature and wheresoever situated, which I may die possessed of or \
                 entitled to, and not hereby or by any codicil hereto otherwise specifically \
                 disposed of, including any lapsed or void gifts, to {}, absolutely.",
                recipient(&only.person)
            ),
            all => format!(
                "I give all the rest, residue, and remainder of my estate, both real and personal, \
                 of whatsoever nature and wheresoever situated, to the following beneficiaries in \
                 equal shares absolutely, per stirpes (such that if any beneficiary predeceases me \
                 leaving issue, such issue shall take their parent's share):\n\n{}",
                name_list(all.iter())
            ),
        }
    } else {
        match tagged.as_slice() {
            [only] => format!(
                "I give all the rest, residue, and remainder of my estate to {}, absolutely.",
                recipient(&only.person)
            ),
            many => format!(
                "I give the residue of my estate to the following beneficiaries in equal \
                 shares:\n\n{}",
                name_list(many.iter().copied())
            ),
        }
    };

    format!("RESIDUARY ESTATE\n\n{}", body)
}

fn name_list<'a>(beneficiaries: impl Iterator<Item = &'a Beneficiary>) -> String {
    beneficiaries
        .map(|b| format!("   - {}", identify(&b.person)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Appoints the first guardian, with the second as fallback
///
/// Returns `None` when no guardian is named.
pub fn guardian_clause(guardians: &[Person]) -> Option<String> {
    let (primary, rest) = guardians.split_first()?;

    let mut clause = format!(
        "GUARDIAN APPOINTMENT\n\n\
         I APPOINT {} of {} to be the guardian of my children under the age of 18 years, to have \
         custody, care and control of them until they attain the age of 18 years.",
        identify(primary),
        primary.address
    );

    if let Some(backup) = rest.first() {
        clause.push_str(&format!(
            "\n\nIF my said primary guardian is unwilling or unable to act, THEN I APPOINT {} to \
             be the guardian of my minor children.",
            identify(backup)
        ));
    }

    Some(clause)
}

pub fn special_instructions_clause(instructions: &str) -> String {
    format!("SPECIAL INSTRUCTIONS\n\n{}", instructions)
}

pub fn testimonium_clause(date: NaiveDate) -> String {
    format!(
        "TESTIMONIUM\n\nIN WITNESS WHEREOF I have hereunto set my hand and seal this {}.",
        format_legal_date(date)
    )
}

/// Signature blocks for the testator and both witnesses
pub fn attestation_clause(testator: &Testator, witnesses: &[Person; WITNESS_COUNT]) -> String {
    let name = testator.person.display_name();

    let mut clause = format!(
        "{}\nSignature of Testator\n{}\nNRIC NO. {}\n\n\
         SIGNED by the above-named {} as and for the Testator's LAST WILL AND TESTAMENT in the \
         presence of us, present at the same time, who at the Testator's request and in the \
         Testator's presence and in the presence of each other have hereunto subscribed our names \
         as witnesses:",
        SIGNATURE_LINE,
        name,
        testator.person.formatted_nric(),
        name
    );

    for (i, witness) in witnesses.iter().enumerate() {
        clause.push_str(&format!(
            "\n\nWITNESS {}:\n\n{}\nSignature of Witness\n{}\nNRIC NO. {}\nAddress: {}",
            i + 1,
            SIGNATURE_LINE,
            witness.display_name(),
            witness.formatted_nric(),
            witness.address
        ));
    }

    clause
}

/// Guidance for executing the will under the Wills Act 1959
pub fn signing_instructions() -> &'static str {
    SIGNING_INSTRUCTIONS
}

const SIGNING_INSTRUCTIONS: &str = "INSTRUCTIONS FOR SIGNING YOUR WILL

REQUIREMENTS FOR VALIDITY (Wills Act 1959, Section 5):

1. TESTATOR SIGNATURE
   - Sign at the END of the will, in blue or black ink
   - Sign in the presence of BOTH witnesses at the same time

2. WITNESS SIGNATURES
   - Both witnesses sign AFTER you, while you and each other are present
   - All three people must be in the same room at the same time

3. WITNESS QUALIFICATIONS
   - Must be 18+ years old (preferably 21+) and of sound mind
   - CANNOT be beneficiaries named in the will, or spouses of beneficiaries
   - CAN be an executor who is not also a beneficiary

4. AFTER SIGNING
   - Store the ORIGINAL safely and tell your executor where it is kept
   - Never staple, clip, or mark the original
   - Review the will every 3-5 years or after major life events

5. IMPORTANT REMINDERS
   - Marriage or remarriage automatically REVOKES your will
   - Divorce does NOT revoke your will; make a new one
   - EPF/KWSP and insurance policies require separate nominations
   - Joint bank accounts pass by survivorship, not through the will
   - This will is for NON-MUSLIMS only; Muslims need a Wasiat

6. CUSTODY OPTIONS
   - Home safe, bank safe deposit box, law firm or professional custody services
   - Do not leave the original with an executor who is also a beneficiary";
