//! Demo corpus seeding.
//!
//! Preloads a registry/store pair with the product's demo files and chat
//! transcripts so a fresh deployment has something to show. The transcripts
//! double as scripted answers for the canned provider.

use crate::canned_provider::CannedProvider;
use parlance_core::conversation::{ConversationKey, ConversationStore, MessageDraft};
use parlance_core::domain::Domain;
use parlance_core::error::Result;
use parlance_core::file::{FileRecord, FileRegistry, NewFile};

struct DemoFile {
    name: &'static str,
    media_type: &'static str,
    size_bytes: u64,
    domain: Domain,
    transcript: &'static [DemoExchange],
}

struct DemoExchange {
    question: &'static str,
    answer: &'static str,
}

const ANNUAL_REPORT_TRANSCRIPT: &[DemoExchange] = &[
    DemoExchange {
        question: "What were the key financial highlights from the annual report?",
        answer: "Based on the Annual Report 2023, the key financial highlights include a 15% \
                 increase in revenue from $1.2B to $1.38B, a gross margin improvement of 2.3 \
                 percentage points to 42.8%, and an EBITDA growth of 18% year-over-year. The \
                 company also reduced its debt-to-equity ratio from 0.8 to 0.6 and increased \
                 R&D investment by 22%.",
    },
    DemoExchange {
        question: "What were the main challenges mentioned?",
        answer: "The report highlighted several challenges, including supply chain disruptions \
                 that affected product availability in Q2, increasing raw material costs that \
                 impacted margins by approximately 1.5%, and intense competition in emerging \
                 markets, particularly in Southeast Asia. The report also mentioned regulatory \
                 changes in European markets that required additional compliance investments of \
                 $3.2M.",
    },
];

const CONTRACT_TRANSCRIPT: &[DemoExchange] = &[DemoExchange {
    question: "What are the termination clauses in this contract?",
    answer: "The contract contains several termination clauses in Section 14 (pages 23-25). \
             Either party may terminate with 60 days written notice. Immediate termination is \
             permitted in cases of material breach, insolvency, or force majeure lasting more \
             than 90 consecutive days. Early termination fees apply on a sliding scale: 50% of \
             remaining contract value if terminated in year 1, 30% in year 2, and 10% in year \
             3. There are also specific performance-related termination rights in Appendix C.",
}];

const MEETING_RECORDING_TRANSCRIPT: &[DemoExchange] = &[DemoExchange {
    question: "Could you summarize the key points from this meeting recording?",
    answer: "Based on the meeting recording, here are the key points discussed:\n\n1. Q4 \
             product launch timeline was adjusted from November to mid-December due to supply \
             chain issues\n2. Marketing budget was increased by 15% to support the delayed \
             launch\n3. The team approved the new UI design for the mobile app with minor \
             revisions to the checkout flow\n4. Customer feedback from beta testing showed 87% \
             satisfaction, with concerns mainly about loading speed\n5. Next steps include \
             finalizing the press release by September 15th and scheduling a follow-up meeting \
             for October 1st to review progress",
}];

const DEMO_FILES: &[DemoFile] = &[
    DemoFile {
        name: "Annual Report 2023.pdf",
        media_type: "pdf",
        size_bytes: 4_200_000,
        domain: Domain::Business,
        transcript: ANNUAL_REPORT_TRANSCRIPT,
    },
    DemoFile {
        name: "Contract Agreement.pdf",
        media_type: "pdf",
        size_bytes: 1_800_000,
        domain: Domain::Legal,
        transcript: CONTRACT_TRANSCRIPT,
    },
    DemoFile {
        name: "Medical Report.pdf",
        media_type: "pdf",
        size_bytes: 3_100_000,
        domain: Domain::Medical,
        transcript: &[],
    },
    DemoFile {
        name: "Research Paper.pdf",
        media_type: "pdf",
        size_bytes: 2_700_000,
        domain: Domain::Academic,
        transcript: &[],
    },
    DemoFile {
        name: "Presentation Slides.pdf",
        media_type: "pdf",
        size_bytes: 5_300_000,
        domain: Domain::Business,
        transcript: &[],
    },
    DemoFile {
        name: "Meeting Recording.mp3",
        media_type: "audio",
        size_bytes: 18_500_000,
        domain: Domain::Business,
        transcript: MEETING_RECORDING_TRANSCRIPT,
    },
    DemoFile {
        name: "Project Diagram.png",
        media_type: "image",
        size_bytes: 2_300_000,
        domain: Domain::General,
        transcript: &[],
    },
    DemoFile {
        name: "Product Demo.mp4",
        media_type: "video",
        size_bytes: 42_700_000,
        domain: Domain::Business,
        transcript: &[],
    },
];

/// Registers the demo files and replays their chat transcripts.
///
/// Files are registered oldest-first, so a default listing shows the last
/// demo file first. Returns the stored records in registration order.
pub async fn seed_demo_corpus(
    registry: &dyn FileRegistry,
    store: &dyn ConversationStore,
) -> Result<Vec<FileRecord>> {
    let mut records = Vec::with_capacity(DEMO_FILES.len());

    for demo in DEMO_FILES {
        let record = registry
            .register(NewFile {
                name: demo.name.to_string(),
                media_type: demo.media_type.to_string(),
                size_bytes: demo.size_bytes,
                domain: demo.domain.clone(),
            })
            .await?;

        let key = ConversationKey::file(&record.id);
        for exchange in demo.transcript {
            store
                .append(&key, MessageDraft::user(exchange.question, record.domain.clone()))
                .await?;
            store
                .append(
                    &key,
                    MessageDraft::assistant(exchange.answer, record.domain.clone()),
                )
                .await?;
        }

        records.push(record);
    }

    tracing::info!(target: "demo_corpus", "Seeded {} demo files", records.len());
    Ok(records)
}

/// A canned provider scripted with every demo transcript answer.
pub fn demo_provider() -> CannedProvider {
    DEMO_FILES
        .iter()
        .flat_map(|demo| demo.transcript.iter())
        .fold(CannedProvider::new(), |provider, exchange| {
            provider.with_scripted_answer(exchange.question, exchange.answer)
        })
}
