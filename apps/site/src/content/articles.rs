//! The four "phase" narrative articles behind the about-page cards.
//!
//! Each article is a fixed sequence of paragraphs rendered top to bottom;
//! the slug is the trailing segment of the article's route under `/about/`.

/// A full life-phase article: cover image, title, and ordered paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseArticle {
    pub slug: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
    pub paragraphs: &'static [&'static str],
}

/// Looks up an article by its route slug (`phase1`..`phase4`).
pub fn article_by_slug(slug: &str) -> Option<&'static PhaseArticle> {
    ARTICLES.iter().find(|article| article.slug == slug)
}

pub static ARTICLES: [PhaseArticle; 4] = [
    PhaseArticle {
        slug: "phase1",
        title: "Phase 1: Elementary Years",
        image: "/images/phase1.jpg",
        alt: "Phase 1: Elementary Years",
        paragraphs: &[
            "Growing up, I was like the proverbial frog in the well, believing my small \
             neighborhood in Seoul was the whole world. My life was confined to familiar \
             streets and familiar faces, and I never thought much beyond them. This changed \
             when, unexpectedly, my parents told me that I would be going to the United \
             States—not with them, but alone, to experience a new culture. I found myself in \
             North Carolina for three months, living with a host family and trying to \
             navigate a world where I barely understood the language. Adapting to this new \
             environment was not easy. The unfamiliar language and customs were overwhelming, \
             but over time, through my homestay experience, I gradually became more \
             accustomed to American culture. The initial feelings of loneliness and \
             negativity began to fade, replaced by a budding sense of curiosity and \
             resilience. Despite this, I returned to Korea with lingering doubts, wondering, \
             \"Do I really have to do this again?\"",
            "The following year, my family and I moved together to Williamsburg, Virginia, \
             for a longer stay. This time, with my family by my side, I found it easier to \
             embrace the changes. Together, we traveled around North America, and each \
             journey brought new sights and experiences that continued to expand my \
             worldview. The vastness and beauty of North America left a lasting impression \
             on me, transforming my initial reluctance into a genuine appreciation. I \
             realized how much more there was to see beyond the narrow scope of my previous \
             life. As I discovered more of this fascinating world, I found myself longing to \
             uncover new places and perspectives, becoming captivated by the idea of \
             constantly seeking out the unknown.",
            "Even after returning to Korea, this fascination with exploring didn’t fade. In \
             fact, my desire to experience new cultures and environments only grew stronger. \
             This led me to seek out another adventure, choosing to attend an international \
             school in Singapore. I wanted to immerse myself in yet another culture that was \
             both fresh and different from anything I’d known. My time in Singapore exposed \
             me to a rich tapestry of people and ideas, each experience further broadening \
             my understanding and helping me develop a more global perspective.",
        ],
    },
    PhaseArticle {
        slug: "phase2",
        title: "Phase 2: High School Life",
        image: "/images/phase2.jpg",
        alt: "Phase 2: High School Life",
        paragraphs: &[
            "Even after returning to Korea, my desire to explore new cultures only \
             intensified. This yearning led me to take a bold step and enroll in an \
             international school in Singapore—UWCSEA—hoping to immerse myself in a fresh \
             and diverse environment. However, my journey did not unfold as smoothly as I \
             had envisioned. Starting directly in Grade 10, I skipped Grade 9 due to the \
             academic differences between Korea and Singapore, which left me little time to \
             adapt to the rigorous International Baccalaureate (IB) curriculum. I soon found \
             myself struggling in an unfamiliar setting, feeling isolated and homesick as I \
             navigated life in a dormitory far from family and friends. The cultural and \
             language barriers felt overwhelming, and I couldn't help but feel it was unfair \
             to compete academically with native English speakers. Envying the ease with \
             which they communicated, I grew frustrated, often questioning my decision and \
             longing for the familiar comfort of home.",
            "Watching my grade report was a wake-up call that struck me deeply. The \
             realization that friends who once had similar or even lower grades were now \
             excelling far beyond me was hard to accept. Seeing the stark difference between \
             their achievements and my own filled me with a desire to change. I knew I \
             couldn’t continue in the same way if I wanted to grow. This experience made me \
             confront my own shortcomings and motivated me to push beyond my comfort zone. \
             With this new determination, I began seeking ways to improve. I had many \
             discussions with my parents, who encouraged me to focus on self-discovery \
             rather than dwelling on comparisons. I gradually came to understand that my \
             setbacks were an opportunity to redefine my path and grow stronger.",
            "Embracing this mindset shift, I started paying more attention to what I \
             genuinely enjoyed, like storytelling. I experimented with writing fan-fiction, \
             which gathered an unexpectedly positive response online and even reached over a \
             million views. This creative outlet was one of the few things that brought me \
             joy during that period, and it reminded me of the passion I had for creating \
             stories that could resonate with others.",
            "During this period, I watched Frozen 2, which brought back memories of my time \
             in America and the joy Disney films had brought me as a child. I realized that \
             my dream was to create animated films that could inspire and bring happiness to \
             people of all ages, just as Disney had done for me. Specifically, I wanted to \
             craft stories like those of Disney or Studio Ghibli—narratives that touch the \
             hearts of both children and adults alike. However, knowing that science-based \
             majors would be advantageous for admission to U.S. universities, I decided to \
             pursue a field that was both close to animation and grounded in science: \
             computer science. This way, I could still work towards my dream while building \
             a strong academic foundation.",
        ],
    },
    PhaseArticle {
        slug: "phase3",
        title: "Phase 3: University Life",
        image: "/images/phase3.jpg",
        alt: "Phase 3: University Life",
        paragraphs: &[
            "As I immersed myself in the world of computer science, I quickly realized that \
             it offered even more possibilities than I had initially imagined. My interest \
             in the field grew as I saw how technology could enable storytelling and create \
             experiences that bring joy to others. During the COVID-19 pandemic, when the \
             world felt uncertain and isolating, video games like Super Mario and The Legend \
             of Zelda became a source of comfort for me. These games provided an escape, \
             allowing me to explore vibrant worlds and immerse myself in stories beyond my \
             own. Inspired by these experiences, I began to dream not only of creating \
             animations but also of designing games that could evoke similar feelings of \
             wonder and discovery for others.",
            "This newfound inspiration led me to start compiling notes and ideas for both \
             games and animations. I spent countless hours brainstorming and planning, \
             thinking of ways to combine my love for storytelling with interactive, \
             immersive experiences. The possibility of building my own game worlds and \
             characters fascinated me, and I dedicated myself to learning the skills \
             necessary to bring these ideas to life. I took my first steps by studying game \
             design concepts, creating sketches, and exploring the various elements that \
             make a game both engaging and meaningful. This journey was both challenging \
             and rewarding, as it gave me a clear direction for my future.",
            "Despite the difficulties of high school, especially during the pandemic, I \
             found a sense of purpose in my growing passion for computer science. I was \
             captivated by the technical possibilities of the field and the creative \
             freedom it offered. Initially, I had turned to games to relieve stress, but \
             over time, I developed a strong desire to create my own. I imagined building a \
             game that combined the best aspects of console and mobile gaming, one that \
             could be enjoyed both online and offline. With this goal in mind, I set out to \
             learn programming languages like C, Java, and Python, striving to build a \
             solid foundation. My hard work paid off as I achieved top grades in my \
             computer science courses, reinforcing my commitment to pursuing this path.",
            "By the end of high school, I had even managed to develop a small mobile game \
             inspired by Flappy Bird, marking my first real step into game development. \
             This experience solidified my aspirations in both animation and game design. \
             My dream had evolved from simply creating animations to building interactive \
             stories that could be both played and experienced by people of all ages. \
             Moving forward, I felt confident that I had found a field where I could \
             combine storytelling, technical skills, and a deep passion for games. This \
             realization was not just about career choice—it was the beginning of a \
             lifelong journey to bring joy and imagination into people’s lives through the \
             medium of games and technology.",
        ],
    },
    PhaseArticle {
        slug: "phase4",
        title: "Phase 4: Army Experience",
        image: "/images/phase4.jpg",
        alt: "Phase 4: Army Experience",
        paragraphs: &[
            "My time in the army was a challenging period, both physically and mentally. \
             The structured environment was unlike anything I had experienced before; there \
             was little freedom to pursue my interests, go out as I pleased, or study what \
             I wanted. Initially, this lack of control felt stifling, and the demanding \
             routines left me exhausted. However, amid these difficulties, I discovered an \
             invaluable lesson in time management. With my free time so limited, I learned \
             to make the most of each moment, using any opportunity to focus on my goals \
             and passions. I began carrying a notebook with me, jotting down ideas whenever \
             I could, capturing thoughts that would later fuel my ambitions. Over time, I \
             developed ten Game Design Documents (GDDs) and drafted outlines for animation \
             scripts, laying the foundation for future projects.",
            "Despite the restrictions, I was determined not to lose touch with my interest \
             in computer science. I continued to study whenever I could, diving deeper into \
             the field I loved. One area that particularly captured my attention was \
             artificial intelligence. The army environment, while limiting in some ways, \
             provided me the space to reflect on the potential of AI and its role in \
             shaping the future of technology. Through books, articles, and online \
             resources, I explored how AI was transforming industries, especially gaming \
             and animation—fields close to my heart. I became increasingly intrigued by the \
             possibilities AI offered, imagining ways it could be integrated into my own \
             projects to enhance creativity and streamline processes.",
            "As my understanding of AI deepened, so did my excitement about its potential \
             to revolutionize the creative world. I realized that AI could democratize \
             access to game and animation development, making these fields more \
             approachable for creators who may lack traditional technical expertise. This \
             idea resonated deeply with me, as I had always dreamed of building imaginative \
             worlds and telling stories but often felt constrained by limited resources. \
             AI, I discovered, had the power to bridge that gap, enabling people like \
             me—and countless others—to bring their ideas to life more easily. The thought \
             of using AI to remove barriers and empower other creators was inspiring, and \
             it motivated me to think beyond my own projects.",
            "Looking to the future, I am driven by the goal of developing AI tools \
             specifically tailored for creative industries. My time in the army taught me \
             resilience, discipline, and the importance of maximizing limited resources—all \
             qualities that I believe will help me in this mission. By creating AI-driven \
             tools that support artists, writers, and designers, I hope to make it easier \
             for anyone with a dream to bring their imagination into reality. This path not \
             only aligns with my personal ambitions but also fulfills a greater purpose: \
             empowering others to tell their stories and share their unique visions with \
             the world.",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_slug() {
        let article = article_by_slug("phase2").expect("phase2 exists");
        assert_eq!(article.title, "Phase 2: High School Life");
    }

    #[test]
    fn test_unknown_slug_is_none() {
        assert!(article_by_slug("phase5").is_none());
        assert!(article_by_slug("").is_none());
    }

    #[test]
    fn test_every_article_has_paragraphs_and_cover() {
        for article in &ARTICLES {
            assert!(!article.paragraphs.is_empty());
            assert!(article.image.starts_with("/images/"));
        }
    }
}
