//! Curated prompts and micro-actions per mood
//!
//! Each list is ordered from gentle to deeper; the composer slices it by
//! confidence tier (two entries per tier).

use crate::types::Mood;

/// Prompt shown when there is nothing to analyze
pub const EMPTY_PROMPT: &str = "Nothing to reflect on yet. What is on your mind right now?";

/// Micro-action shown when there is nothing to analyze
pub const EMPTY_ACTION: &str = "Take one slow breath and write a single sentence about how you feel.";

/// Mood-independent suggestions attached to every non-empty insight
pub const SUGGESTIONS: &[&str] = &[
    "If you feel overwhelmed, try one tiny, concrete next step (2-10 minutes).",
    "If the mood persists, consider talking to a trusted person or a professional.",
];

/// Reflection prompts for a mood
pub fn prompts(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Anxious => &[
            "What would you tell a friend who felt exactly this way?",
            "What might help you feel 10% more at ease?",
            "Which part of your worry is based on imagination, not fact?",
            "What's the smallest, real action you can take next?",
            "What outcome are you trying too hard to control?",
            "What can you delegate, delay, or drop right now?",
        ],
        Mood::Sad => &[
            "What do you wish someone could remind you right now?",
            "Who or what gives you comfort when words don't work?",
            "What emotion sits just beneath your sadness?",
            "What helped you recover before, and could it help again?",
            "What are you still holding on to that needs release?",
            "What would compassion for yourself look like in this moment?",
        ],
        Mood::Angry => &[
            "What part of you is really asking to be understood?",
            "How could you express this anger safely and constructively?",
            "Which value or boundary feels violated right now?",
            "What outcome do you actually want beyond being right?",
            "What need or fear hides behind the irritation?",
            "What boundary could you communicate more clearly next time?",
        ],
        Mood::Confused => &[
            "What's the one fact you're absolutely sure of right now?",
            "Which option feels lighter or more natural in your body?",
            "What's one question that would make things clearer if answered?",
            "How can you make a small experiment instead of a big decision?",
            "What are you afraid might happen if you choose wrong?",
            "Which question are you avoiding because it matters most?",
        ],
        Mood::Motivated => &[
            "What small win deserves celebration right now?",
            "What's the next micro-goal that moves you forward?",
            "How will today's effort benefit your future self?",
            "What's one distraction you can cut for 24 hours?",
            "How can you make consistency easier than motivation?",
            "What reminds you why you started this journey?",
        ],
        Mood::Optimistic => &[
            "What small progress are you proud of today?",
            "What made you smile unexpectedly this week?",
            "What gives your motivation meaning right now?",
            "How can you turn hope into practical effort?",
            "What future version of yourself are you becoming?",
            "How can you use this positive energy to help someone else?",
        ],
        Mood::Calm => &[
            "What is working right now that you'd like to protect?",
            "How does calm feel physically; can you notice it now?",
            "What brings this sense of calm, and how can you extend it?",
            "What slow ritual restores your inner balance?",
            "What boundary keeps this serenity intact?",
            "What do you want to protect your energy from this week?",
        ],
        Mood::Neutral => &[
            "What could make today 1% more interesting?",
            "What feels steady and reliable in your life today?",
            "What moment of balance can you appreciate right now?",
            "What habit has quietly made your life better?",
            "What are you taking for granted that's actually working?",
            "If nothing feels urgent, what's quietly calling your name?",
        ],
    }
}

/// Micro-actions for a mood
pub fn actions(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Anxious => &[
            "Practice box-breathing (4-4-4-4) for one minute.",
            "Name 5 things you see, 4 you feel, 3 you hear.",
            "Write down your top worry, then one thing you can do about it.",
            "Stretch your neck and shoulders slowly.",
            "Write one reassuring truth from your past experience.",
            "Do a 10-minute body scan from head to toe.",
        ],
        Mood::Sad => &[
            "Drink water and rest your eyes for 2 minutes.",
            "Listen to one comforting song fully with eyes closed.",
            "Go for a 5-minute walk and notice colors or textures.",
            "Note three small things still in your control.",
            "Message a friend without pretending you're fine.",
            "Write one line about what you wish to release.",
        ],
        Mood::Angry => &[
            "Exhale longer than you inhale, 3 times.",
            "Leave the room for 30 seconds before reacting.",
            "Squeeze a stress object, then release slowly.",
            "Rephrase your thought starting with 'I feel... because...'",
            "Journal freely for 3 minutes about what's under your anger.",
            "Name what boundary was crossed and say it to yourself.",
        ],
        Mood::Confused => &[
            "Write your question in one clear sentence.",
            "Take a short walk; new ideas often appear while moving.",
            "List 3 possible next steps and choose the smallest one.",
            "Draw your dilemma in two boxes: what's known vs unknown.",
            "Pick one option to test for 24 hours and observe.",
            "Ask a friend to mirror your thoughts back to you.",
        ],
        Mood::Motivated => &[
            "Write the top 3 tasks for today in order.",
            "Start with the easiest 2-minute version of your goal.",
            "Set a 20-minute deep-work timer.",
            "Eliminate one small distraction for an hour.",
            "Log your wins for the day, no matter how small.",
            "End the day by planning tomorrow's first 15 minutes.",
        ],
        Mood::Optimistic => &[
            "Write down 3 moments that went right today.",
            "Send an encouraging message to someone who needs it.",
            "Create a short gratitude list and read it aloud.",
            "Plan one realistic, exciting goal for next week.",
            "Note one quality that makes you resilient.",
            "Do something kind for a stranger or friend.",
        ],
        Mood::Calm => &[
            "Close your eyes and focus on breathing for 60 seconds.",
            "Drink something warm without distraction.",
            "Notice three physical sensations of calm in your body.",
            "Write one line of gratitude for your current peace.",
            "Avoid multitasking for 30 minutes.",
            "Limit screen time for the next hour.",
        ],
        Mood::Neutral => &[
            "Stretch your hands and neck gently.",
            "Walk 3 minutes outdoors or near a window.",
            "Write one small thing that went unnoticed but good.",
            "Organize a tiny part of your space for freshness.",
            "Reflect on one goal quietly for 2 minutes.",
            "List 3 ordinary things you're grateful for.",
        ],
    }
}
